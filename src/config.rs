//! Environment configuration
//!
//! Read after `dotenvy::dotenv()`, so a local `.env` file works too.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{bail, Context};
use rust_decimal::Decimal;

use crate::pricing::models::FeeSchedule;

/// Longest accepted quote cache TTL (one day)
const MAX_QUOTE_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub currency: String,
    pub fees: FeeSchedule,
    pub suggested_prices: HashMap<String, u64>,
    pub quote_cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            currency: "INR".to_string(),
            fees: FeeSchedule::default(),
            suggested_prices: HashMap::new(),
            quote_cache_ttl: Duration::from_secs(5 * 60),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => v.parse().with_context(|| format!("PORT must be a valid port, got {v:?}"))?,
            None => defaults.port,
        };

        let fees = FeeSchedule {
            insurance_rate: parse_rate(lookup("INSURANCE_RATE"), "INSURANCE_RATE")?
                .unwrap_or(defaults.fees.insurance_rate),
            service_rate: parse_rate(lookup("SERVICE_RATE"), "SERVICE_RATE")?
                .unwrap_or(defaults.fees.service_rate),
        };

        let suggested_prices = match lookup("SUGGESTED_PRICES") {
            Some(v) => parse_price_table(&v)?,
            None => defaults.suggested_prices,
        };

        let quote_cache_ttl = match lookup("QUOTE_CACHE_TTL_SECS") {
            Some(v) => parse_cache_ttl(&v)?,
            None => defaults.quote_cache_ttl,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            currency: lookup("CURRENCY").unwrap_or(defaults.currency),
            fees,
            suggested_prices,
            quote_cache_ttl,
        })
    }
}

fn parse_rate(value: Option<String>, key: &str) -> anyhow::Result<Option<Decimal>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let rate: Decimal = value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a decimal fraction, got {value:?}"))?;
    if rate.is_sign_negative() {
        bail!("{key} must not be negative, got {rate}");
    }
    Ok(Some(rate))
}

/// Quote cache TTL in seconds, 1 up to `MAX_QUOTE_CACHE_TTL_SECS`
fn parse_cache_ttl(value: &str) -> anyhow::Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("QUOTE_CACHE_TTL_SECS must be seconds, got {value:?}"))?;
    if secs == 0 || secs > MAX_QUOTE_CACHE_TTL_SECS {
        bail!("QUOTE_CACHE_TTL_SECS must be between 1 and {MAX_QUOTE_CACHE_TTL_SECS}, got {secs}");
    }
    Ok(Duration::from_secs(secs))
}

/// Parse `category=amount,category=amount`
fn parse_price_table(value: &str) -> anyhow::Result<HashMap<String, u64>> {
    let mut table = HashMap::new();
    for pair in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (category, amount) = pair
            .split_once('=')
            .with_context(|| format!("SUGGESTED_PRICES entry {pair:?} must be category=amount"))?;
        let amount: u64 = amount
            .trim()
            .parse()
            .with_context(|| format!("SUGGESTED_PRICES amount for {category:?} is not a number"))?;
        table.insert(category.trim().to_string(), amount);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.currency, "INR");
        assert_eq!(config.fees, FeeSchedule::default());
        assert!(config.suggested_prices.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("CURRENCY", "USD"),
            ("INSURANCE_RATE", "0.07"),
            ("SERVICE_RATE", "0.12"),
            ("SUGGESTED_PRICES", "cameras=700, tools = 150"),
            ("QUOTE_CACHE_TTL_SECS", "60"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.fees.insurance_rate, dec!(0.07));
        assert_eq!(config.fees.service_rate, dec!(0.12));
        assert_eq!(config.suggested_prices.get("cameras"), Some(&700));
        assert_eq!(config.suggested_prices.get("tools"), Some(&150));
        assert_eq!(config.quote_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        assert!(Config::from_lookup(lookup(&[("SERVICE_RATE", "-0.1")])).is_err());
    }

    #[test]
    fn test_cache_ttl_bounds() {
        assert!(Config::from_lookup(lookup(&[("QUOTE_CACHE_TTL_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("QUOTE_CACHE_TTL_SECS", "86401")])).is_err());
        assert!(Config::from_lookup(lookup(&[(
            "QUOTE_CACHE_TTL_SECS",
            "18446744073709551615"
        )]))
        .is_err());

        let config = Config::from_lookup(lookup(&[("QUOTE_CACHE_TTL_SECS", "86400")])).unwrap();
        assert_eq!(config.quote_cache_ttl, Duration::from_secs(86_400));
        // Largest accepted TTL must still build a cache
        let _cache = crate::cache::AppCache::new(config.quote_cache_ttl);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert!(Config::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("INSURANCE_RATE", "five percent")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SUGGESTED_PRICES", "cameras")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SUGGESTED_PRICES", "cameras=lots")])).is_err());
    }
}
