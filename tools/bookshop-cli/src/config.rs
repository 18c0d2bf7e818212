//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use bookshop_commerce::prelude::{Currency, QuantityPolicy, ValidationPolicy};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["bookshop.toml", ".bookshop.toml", "bookshop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Store-wide settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Cart and checkout behavior.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency prices are shown in.
    #[serde(default)]
    pub currency: Currency,
}

/// Cart and checkout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Whether checkout steps require their fields.
    #[serde(default)]
    pub validation: ValidationPolicy,

    /// Whether the cart rejects quantities <= 0.
    #[serde(default)]
    pub quantity_policy: QuantityPolicy,

    /// Simulated order service latency.
    #[serde(default = "default_submit_latency_ms")]
    pub submit_latency_ms: u64,

    /// Give up on a submission after this long.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_timeout_ms: Option<u64>,
}

fn default_submit_latency_ms() -> u64 {
    1500
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            validation: ValidationPolicy::default(),
            quantity_policy: QuantityPolicy::default(),
            submit_latency_ms: default_submit_latency_ms(),
            submit_timeout_ms: None,
        }
    }
}

impl CheckoutConfig {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_ms.map(Duration::from_millis)
    }
}

/// Generate a default bookshop.toml config file.
pub fn generate_default_config() -> String {
    r#"# Bookshop storefront configuration

[store]
currency = "USD"

[checkout]
# "permissive" lets every step advance with blank fields; "strict" requires them
validation = "permissive"
# "strict" rejects cart quantities of zero or less
quantity_policy = "permissive"
submit_latency_ms = 1500
# submit_timeout_ms = 10000
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let parsed: ShopConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, ShopConfig::default());
        assert_eq!(parsed.checkout.submit_latency(), Duration::from_millis(1500));
        assert_eq!(parsed.checkout.submit_timeout(), None);
    }

    #[test]
    fn test_partial_config() {
        let parsed: ShopConfig = toml::from_str(
            r#"
            [checkout]
            validation = "strict"
            submit_timeout_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(parsed.store.currency, Currency::USD);
        assert_eq!(parsed.checkout.validation, ValidationPolicy::Strict);
        assert_eq!(parsed.checkout.quantity_policy, QuantityPolicy::Permissive);
        assert_eq!(parsed.checkout.submit_latency_ms, 1500);
        assert_eq!(parsed.checkout.submit_timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_json_config() {
        let parsed: ShopConfig =
            serde_json::from_str(r#"{"store": {"currency": "EUR"}}"#).unwrap();
        assert_eq!(parsed.store.currency, Currency::EUR);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result: Result<ShopConfig, _> =
            toml::from_str("[checkout]\nvalidation = \"lenient\"\n");
        assert!(result.is_err());
    }
}
