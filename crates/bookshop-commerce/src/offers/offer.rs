//! Offer types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{OfferId, ProductId};
use crate::money::{Currency, Money};

/// How an offer's `value` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferKind {
    /// `value` percent off.
    Percentage,
    /// `value` off in the store currency.
    Fixed,
    /// Buy `value - 1`, get one free.
    Bundle,
}

impl OfferKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferKind::Percentage => "percentage",
            OfferKind::Fixed => "fixed",
            OfferKind::Bundle => "bundle",
        }
    }
}

/// Offer lifecycle as set by an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Active,
    Scheduled,
    Expired,
}

impl OfferStatus {
    pub const ALL: [OfferStatus; 3] = [
        OfferStatus::Active,
        OfferStatus::Scheduled,
        OfferStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OfferStatus::Active => "active",
            OfferStatus::Scheduled => "scheduled",
            OfferStatus::Expired => "expired",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OfferStatus::Active => "Active",
            OfferStatus::Scheduled => "Scheduled",
            OfferStatus::Expired => "Expired",
        }
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for OfferStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        OfferStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == lower)
            .ok_or_else(|| CommerceError::InvalidFieldValue {
                field: "status".to_string(),
                value: s.to_string(),
            })
    }
}

/// A promotional offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub kind: OfferKind,
    pub value: f64,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: OfferStatus,
    /// Products the offer covers; empty means every product.
    pub products: Vec<ProductId>,
}

impl Offer {
    /// The offer's value as shown to shoppers, e.g. "20%", "$5.00" or
    /// "Buy 2, get 1 free".
    pub fn value_label(&self, currency: Currency) -> String {
        match self.kind {
            OfferKind::Percentage => format!("{}%", self.value),
            OfferKind::Fixed => Money::from_decimal(self.value, currency).display(),
            OfferKind::Bundle => format!("Buy {}, get 1 free", self.value - 1.0),
        }
    }

    pub fn covers_all_products(&self) -> bool {
        self.products.is_empty()
    }

    pub fn applies_to(&self, product: &ProductId) -> bool {
        self.covers_all_products() || self.products.contains(product)
    }

    /// Active and `date` falls inside the validity window, both ends included.
    pub fn is_live_on(&self, date: NaiveDate) -> bool {
        self.status == OfferStatus::Active && self.start_date <= date && date <= self.end_date
    }
}
