//! Suggested daily prices for new listings.
//!
//! Suggestions come from an external oracle. The crate ships a static
//! category table; anything smarter plugs in behind `PriceOracle`.

use std::collections::HashMap;

/// What an oracle gets to look at when suggesting a price
#[derive(Debug, Clone)]
pub struct ListingMetadata {
    pub name: String,
    pub category: String,
    pub location: String,
}

pub trait PriceOracle: Send + Sync + 'static {
    /// Suggested daily price in minor units, if the oracle has one.
    fn suggest_price(&self, metadata: &ListingMetadata) -> Option<u64>;
}

/// Oracle answering from a fixed category -> price table
#[derive(Debug, Clone, Default)]
pub struct StaticPriceOracle {
    prices: HashMap<String, u64>,
}

impl StaticPriceOracle {
    pub fn new(prices: HashMap<String, u64>) -> Self {
        Self {
            prices: prices
                .into_iter()
                .map(|(category, price)| (category.to_lowercase(), price))
                .collect(),
        }
    }
}

impl PriceOracle for StaticPriceOracle {
    fn suggest_price(&self, metadata: &ListingMetadata) -> Option<u64> {
        self.prices.get(&metadata.category.to_lowercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(category: &str) -> ListingMetadata {
        ListingMetadata {
            name: "Sony A7 III".to_string(),
            category: category.to_string(),
            location: "Chennai, Tamil Nadu".to_string(),
        }
    }

    #[test]
    fn test_static_oracle_matches_category_case_insensitively() {
        let oracle = StaticPriceOracle::new(HashMap::from([("Cameras".to_string(), 700)]));
        assert_eq!(oracle.suggest_price(&metadata("cameras")), Some(700));
        assert_eq!(oracle.suggest_price(&metadata("CAMERAS")), Some(700));
    }

    #[test]
    fn test_static_oracle_unknown_category() {
        let oracle = StaticPriceOracle::new(HashMap::from([("cameras".to_string(), 700)]));
        assert_eq!(oracle.suggest_price(&metadata("tools")), None);
    }

    #[test]
    fn test_empty_oracle_never_suggests() {
        let oracle = StaticPriceOracle::default();
        assert_eq!(oracle.suggest_price(&metadata("cameras")), None);
    }
}
