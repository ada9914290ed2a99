use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{InvoiceCalculator, DEFAULT_CURRENCY_SYMBOL, DEFAULT_TAX_RATE};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("Tax rate must be between 0 and 1, got {0}")]
    TaxRateOutOfRange(Decimal),
}

/// Runtime settings, read from the environment with built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tax_rate: Decimal,
    pub currency_symbol: String,
    pub mailbox_size: usize,
    pub platform_api_level: u32,
    pub permissions_granted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            mailbox_size: 32,
            platform_api_level: 33,
            permissions_granted: true,
        }
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source. Missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let tax_rate: Decimal = parse_or(&lookup, "POS_TAX_RATE", defaults.tax_rate)?;
        if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
            return Err(ConfigError::TaxRateOutOfRange(tax_rate));
        }
        Ok(Self {
            tax_rate,
            currency_symbol: lookup("POS_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            mailbox_size: parse_or(&lookup, "POS_MAILBOX_SIZE", defaults.mailbox_size)?,
            platform_api_level: parse_or(&lookup, "POS_PLATFORM_API_LEVEL", defaults.platform_api_level)?,
            permissions_granted: parse_or(&lookup, "POS_PERMISSIONS_GRANTED", defaults.permissions_granted)?,
        })
    }

    pub fn calculator(&self) -> InvoiceCalculator {
        InvoiceCalculator::new(self.tax_rate, self.currency_symbol.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tax_rate, Decimal::new(12, 2));
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = config_from(&[
            ("POS_TAX_RATE", "0.21"),
            ("POS_CURRENCY_SYMBOL", "€"),
            ("POS_MAILBOX_SIZE", "8"),
            ("POS_PERMISSIONS_GRANTED", "false"),
        ])
        .unwrap();
        assert_eq!(config.tax_rate, Decimal::new(21, 2));
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.mailbox_size, 8);
        assert!(!config.permissions_granted);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        assert_eq!(
            config_from(&[("POS_MAILBOX_SIZE", "lots")]),
            Err(ConfigError::InvalidValue {
                key: "POS_MAILBOX_SIZE",
                value: "lots".to_string()
            })
        );
        assert_eq!(
            config_from(&[("POS_TAX_RATE", "1.5")]),
            Err(ConfigError::TaxRateOutOfRange(Decimal::new(15, 1)))
        );
    }
}
