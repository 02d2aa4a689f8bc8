//! Mandi price comparison
//!
//! Fixed reference table of major mandis; a real comparison feed would slot
//! in behind the same output shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandiPrice {
    pub market: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketComparison {
    pub crop: String,
    pub state: String,
    pub markets: Vec<MandiPrice>,
    pub min_price: MandiPrice,
    pub max_price: MandiPrice,
    pub price_range: f64,
}

fn reference_prices() -> Vec<MandiPrice> {
    let entry = |market: &str, price: f64| MandiPrice {
        market: market.to_string(),
        price,
    };
    vec![
        entry("Delhi Mandi", 2100.0),
        entry("Kolkata Mandi", 2050.0),
        entry("Mumbai Mandi", 2150.0),
        entry("Chennai Mandi", 2200.0),
        entry("Bangalore Mandi", 2250.0),
    ]
}

/// Compare prices for a crop across the reference mandis
pub fn market_comparison(crop: &str, state: &str) -> MarketComparison {
    let markets = reference_prices();

    // Non-empty by construction, so min/max always exist.
    let min_price = markets
        .iter()
        .min_by(|a, b| a.price.total_cmp(&b.price))
        .cloned()
        .unwrap_or_else(|| markets[0].clone());
    let max_price = markets
        .iter()
        .max_by(|a, b| a.price.total_cmp(&b.price))
        .cloned()
        .unwrap_or_else(|| markets[0].clone());

    MarketComparison {
        crop: crop.to_string(),
        state: state.to_string(),
        price_range: max_price.price - min_price.price,
        markets,
        min_price,
        max_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_extremes() {
        let comparison = market_comparison("wheat", "Delhi");
        assert_eq!(comparison.markets.len(), 5);
        assert_eq!(comparison.min_price.market, "Kolkata Mandi");
        assert_eq!(comparison.max_price.market, "Bangalore Mandi");
        assert_eq!(comparison.price_range, 200.0);
    }
}
