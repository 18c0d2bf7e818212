//! Checkout form data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checkout::CheckoutStep;
use crate::error::CommerceError;

/// Customer contact information.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Where the order ships.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl ShippingDetails {
    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.zip_code)
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "cod")]
    CashOnDelivery,
    #[serde(rename = "card")]
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cod",
            PaymentMethod::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::Card => "Credit/Debit Card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Card details. Only consulted when paying by card.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl CardDetails {
    /// Card number with all but the last four digits masked.
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() <= 4 {
            return digits.into_iter().collect();
        }
        let last4: String = digits[digits.len() - 4..].iter().collect();
        format!("**** **** **** {last4}")
    }
}

// Keep card data out of debug logs.
impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &self.masked_number())
            .field("expiry", &self.expiry)
            .field("cvv", &"***")
            .finish()
    }
}

/// One form field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutField {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Address(String),
    City(String),
    State(String),
    ZipCode(String),
    PaymentMethod(PaymentMethod),
    CardNumber(String),
    Expiry(String),
    Cvv(String),
}

impl CheckoutField {
    /// Build a field update from a form field name and raw value.
    ///
    /// Names are the form's camelCase names (`firstName`, `zipCode`,
    /// `expiryDate`, ...). The payment method accepts `cod` or `card`.
    pub fn parse(name: &str, value: impl Into<String>) -> Result<Self, CommerceError> {
        let value = value.into();
        let field = match name {
            "firstName" => CheckoutField::FirstName(value),
            "lastName" => CheckoutField::LastName(value),
            "email" => CheckoutField::Email(value),
            "phone" => CheckoutField::Phone(value),
            "address" => CheckoutField::Address(value),
            "city" => CheckoutField::City(value),
            "state" => CheckoutField::State(value),
            "zipCode" => CheckoutField::ZipCode(value),
            "paymentMethod" => match value.as_str() {
                "cod" => CheckoutField::PaymentMethod(PaymentMethod::CashOnDelivery),
                "card" => CheckoutField::PaymentMethod(PaymentMethod::Card),
                _ => {
                    return Err(CommerceError::InvalidFieldValue {
                        field: name.to_string(),
                        value,
                    })
                }
            },
            "cardNumber" => CheckoutField::CardNumber(value),
            "expiryDate" => CheckoutField::Expiry(value),
            "cvv" => CheckoutField::Cvv(value),
            other => return Err(CommerceError::UnknownField(other.to_string())),
        };
        Ok(field)
    }

    /// Form field name.
    pub fn name(&self) -> &'static str {
        match self {
            CheckoutField::FirstName(_) => "firstName",
            CheckoutField::LastName(_) => "lastName",
            CheckoutField::Email(_) => "email",
            CheckoutField::Phone(_) => "phone",
            CheckoutField::Address(_) => "address",
            CheckoutField::City(_) => "city",
            CheckoutField::State(_) => "state",
            CheckoutField::ZipCode(_) => "zipCode",
            CheckoutField::PaymentMethod(_) => "paymentMethod",
            CheckoutField::CardNumber(_) => "cardNumber",
            CheckoutField::Expiry(_) => "expiryDate",
            CheckoutField::Cvv(_) => "cvv",
        }
    }
}

/// Everything the customer enters during checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub contact: ContactInfo,
    pub shipping: ShippingDetails,
    pub payment_method: PaymentMethod,
    pub card: CardDetails,
}

impl CheckoutForm {
    /// Create an empty form (cash on delivery selected).
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one field into the form. Other fields are untouched; switching
    /// to cash on delivery keeps any card details already typed.
    pub fn apply(&mut self, field: CheckoutField) {
        match field {
            CheckoutField::FirstName(v) => self.contact.first_name = v,
            CheckoutField::LastName(v) => self.contact.last_name = v,
            CheckoutField::Email(v) => self.contact.email = v,
            CheckoutField::Phone(v) => self.contact.phone = v,
            CheckoutField::Address(v) => self.shipping.address = v,
            CheckoutField::City(v) => self.shipping.city = v,
            CheckoutField::State(v) => self.shipping.state = v,
            CheckoutField::ZipCode(v) => self.shipping.zip_code = v,
            CheckoutField::PaymentMethod(m) => self.payment_method = m,
            CheckoutField::CardNumber(v) => self.card.number = v,
            CheckoutField::Expiry(v) => self.card.expiry = v,
            CheckoutField::Cvv(v) => self.card.cvv = v,
        }
    }

    /// Names of the blank fields the given step asks for.
    pub fn missing_fields(&self, step: CheckoutStep) -> Vec<&'static str> {
        let blank = |s: &str| s.trim().is_empty();
        let mut missing = Vec::new();
        match step {
            CheckoutStep::Contact => {
                if blank(&self.contact.first_name) {
                    missing.push("firstName");
                }
                if blank(&self.contact.last_name) {
                    missing.push("lastName");
                }
                if blank(&self.contact.email) {
                    missing.push("email");
                }
                if blank(&self.contact.phone) {
                    missing.push("phone");
                }
            }
            CheckoutStep::Shipping => {
                if blank(&self.shipping.address) {
                    missing.push("address");
                }
                if blank(&self.shipping.city) {
                    missing.push("city");
                }
                if blank(&self.shipping.state) {
                    missing.push("state");
                }
                if blank(&self.shipping.zip_code) {
                    missing.push("zipCode");
                }
            }
            CheckoutStep::Payment => {
                if self.payment_method == PaymentMethod::Card {
                    if blank(&self.card.number) {
                        missing.push("cardNumber");
                    }
                    if blank(&self.card.expiry) {
                        missing.push("expiryDate");
                    }
                    if blank(&self.card.cvv) {
                        missing.push("cvv");
                    }
                }
            }
            CheckoutStep::Review => {}
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_field_names() {
        assert_eq!(
            CheckoutField::parse("firstName", "Ada").unwrap(),
            CheckoutField::FirstName("Ada".to_string())
        );
        assert_eq!(
            CheckoutField::parse("zipCode", "62701").unwrap(),
            CheckoutField::ZipCode("62701".to_string())
        );
        assert_eq!(
            CheckoutField::parse("paymentMethod", "card").unwrap(),
            CheckoutField::PaymentMethod(PaymentMethod::Card)
        );
        assert_eq!(CheckoutField::parse("expiryDate", "12/29").unwrap().name(), "expiryDate");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            CheckoutField::parse("middleName", "x"),
            Err(CommerceError::UnknownField("middleName".to_string()))
        );
        assert!(matches!(
            CheckoutField::parse("paymentMethod", "paypal"),
            Err(CommerceError::InvalidFieldValue { .. })
        ));
    }

    #[test]
    fn test_apply_merges_single_field() {
        let mut form = CheckoutForm::new();
        form.apply(CheckoutField::FirstName("Ada".into()));
        form.apply(CheckoutField::City("Springfield".into()));

        assert_eq!(form.contact.first_name, "Ada");
        assert_eq!(form.shipping.city, "Springfield");
        assert_eq!(form.contact.last_name, "");
        assert_eq!(form.payment_method, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_switching_to_cod_keeps_card_details() {
        let mut form = CheckoutForm::new();
        form.apply(CheckoutField::PaymentMethod(PaymentMethod::Card));
        form.apply(CheckoutField::CardNumber("4111111111111111".into()));
        form.apply(CheckoutField::PaymentMethod(PaymentMethod::CashOnDelivery));

        assert_eq!(form.card.number, "4111111111111111");
        assert!(form.missing_fields(CheckoutStep::Payment).is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = CheckoutForm::new();
        assert_eq!(
            form.missing_fields(CheckoutStep::Contact),
            vec!["firstName", "lastName", "email", "phone"]
        );

        form.apply(CheckoutField::Address("1 Main St".into()));
        form.apply(CheckoutField::ZipCode("  ".into()));
        assert_eq!(
            form.missing_fields(CheckoutStep::Shipping),
            vec!["city", "state", "zipCode"]
        );

        form.apply(CheckoutField::PaymentMethod(PaymentMethod::Card));
        form.apply(CheckoutField::Cvv("123".into()));
        assert_eq!(
            form.missing_fields(CheckoutStep::Payment),
            vec!["cardNumber", "expiryDate"]
        );
        assert!(form.missing_fields(CheckoutStep::Review).is_empty());
    }

    #[test]
    fn test_card_debug_is_masked() {
        let card = CardDetails {
            number: "4111 1111 1111 1234".into(),
            expiry: "12/29".into(),
            cvv: "987".into(),
        };
        assert_eq!(card.masked_number(), "**** **** **** 1234");
        let debug = format!("{card:?}");
        assert!(!debug.contains("4111"));
        assert!(!debug.contains("987"));
    }

    #[test]
    fn test_payment_method_serde() {
        assert_eq!(serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(), "\"cod\"");
        let parsed: PaymentMethod = serde_json::from_str("\"card\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Card);
    }
}
