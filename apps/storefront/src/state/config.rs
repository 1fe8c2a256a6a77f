//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FOODFAST_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::info;

use foodfast_core::checkout::PricingConfig;
use foodfast_core::{DEFAULT_DELIVERY_FEE_CENTS, DEFAULT_TAX_RATE_BPS};

/// Application configuration.
///
/// ## Fields
/// All fields have sensible defaults for the demo; deployments override
/// them through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed in the demo banner).
    pub store_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,

    /// Flat delivery fee in cents.
    pub delivery_fee_cents: i64,

    /// Tax rate in basis points (800 = 8%).
    pub tax_rate_bps: u32,

    /// Whether the mock backend should sleep its realistic per-route
    /// delays. Off for tests and impatient demos.
    pub realistic_latency: bool,
}

impl Default for ConfigState {
    /// Returns the demo configuration: FoodFast, USD, $4.99 delivery, 8% tax.
    fn default() -> Self {
        ConfigState {
            store_name: "FoodFast".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            delivery_fee_cents: DEFAULT_DELIVERY_FEE_CENTS,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            realistic_latency: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FOODFAST_STORE_NAME`: Override store name
    /// - `FOODFAST_DELIVERY_FEE_CENTS`: Override delivery fee (e.g., "499")
    /// - `FOODFAST_TAX_RATE`: Override tax rate as a percentage (e.g., "8")
    /// - `FOODFAST_FAST`: Set to "1" to disable the artificial latency
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("FOODFAST_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(fee_str) = std::env::var("FOODFAST_DELIVERY_FEE_CENTS") {
            if let Ok(fee) = fee_str.parse::<i64>() {
                config.delivery_fee_cents = fee;
            } else {
                info!("Ignoring invalid FOODFAST_DELIVERY_FEE_CENTS: {}", fee_str);
            }
        }

        if let Ok(rate_str) = std::env::var("FOODFAST_TAX_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                config.tax_rate_bps = (rate * 100.0) as u32;
            } else {
                info!("Ignoring invalid FOODFAST_TAX_RATE: {}", rate_str);
            }
        }

        if let Ok(fast) = std::env::var("FOODFAST_FAST") {
            config.realistic_latency = fast != "1";
        }

        config
    }

    /// The pricing knobs checkout needs.
    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            delivery_fee_cents: self.delivery_fee_cents,
            tax_rate_bps: self.tax_rate_bps,
        }
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(4697), "$46.97");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_pricing() {
        let config = ConfigState::default();
        assert_eq!(config.delivery_fee_cents, 499);
        assert_eq!(config.tax_rate_bps, 800);

        let pricing = config.pricing();
        assert_eq!(pricing.delivery_fee_cents, 499);
        assert_eq!(pricing.tax_rate_bps, 800);
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(4697), "$46.97");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }
}
