//! Market data and value-chain directory
//!
//! Quote fetching with a time-boxed cache, trend/forecast arithmetic, mandi
//! comparison, and the value-chain contact directory. Upstream data arrives
//! through provider traits so the simulated backends can be swapped for real
//! integrations without touching the callers.

pub mod comparison;
pub mod forecast;
pub mod prices;
pub mod value_chain;

use thiserror::Error;

pub use comparison::{MandiPrice, MarketComparison};
pub use forecast::{ForecastPrice, HistoricalPrice, PriceForecast};
pub use prices::{
    HttpQuoteProvider, MarketData, MarketQuoteProvider, MarketService, RawQuote,
    SimulatedQuoteProvider,
};
pub use value_chain::{
    Buyer, Connection, FarmerIdentity, GroupProcurement, GroupSummary, InputSupplier,
    JoinReceipt, ListingFilter, LogisticsProvider, MarketListing, StubValueChainDirectory,
    ValueChainProvider,
};

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("quote request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed quote payload: {0}")]
    Payload(String),

    #[error("unknown listing: {0}")]
    UnknownListing(String),

    #[error("unknown group: {0}")]
    UnknownGroup(String),
}

/// Round to two decimal places, matching wire precision
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.43902439), 2.44);
        assert_eq!(round2(0.5), 0.5);
        assert_eq!(round2(-1.005), -1.0);
    }
}
