//! Exchange collaborator — price source and order sink.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::PriceSeries;
use crate::error::{Result, StratlabError};

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

/// Market data source and order sink used by the trading bot.
///
/// Implementations report missing or unreachable data as `DataUnavailable`
/// and refused orders as `OrderRejected`. Retries, if any, live here and not
/// in the bot.
pub trait Exchange {
    /// Price history for `symbol`, oldest first.
    fn fetch(&self, symbol: &str) -> Result<Vec<f64>>;

    fn submit_order(&mut self, symbol: &str, side: Side, quantity: f64) -> Result<()>;
}

/// A submitted order, as recorded by [`PaperExchange`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub symbol: String,
    pub side: Side,
    pub quantity: f64,
}

/// In-memory exchange: serves preloaded price series and records orders.
#[derive(Debug, Default)]
pub struct PaperExchange {
    series: HashMap<String, PriceSeries>,
    orders: Vec<OrderRecord>,
    offline: bool,
}

impl PaperExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the price history for a symbol.
    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.load(series);
        self
    }

    pub fn load(&mut self, series: PriceSeries) {
        self.series.insert(series.symbol().to_string(), series);
    }

    /// Append one observation to an existing or new series.
    pub fn push_price(&mut self, symbol: &str, price: f64) {
        self.series
            .entry(symbol.to_string())
            .or_insert_with(|| PriceSeries::new(symbol))
            .push(price);
    }

    /// Simulate an outage: every fetch and order fails while offline.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }
}

impl Exchange for PaperExchange {
    fn fetch(&self, symbol: &str) -> Result<Vec<f64>> {
        if self.offline {
            return Err(StratlabError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "exchange offline".into(),
            });
        }
        self.series
            .get(symbol)
            .map(|s| s.prices().to_vec())
            .ok_or_else(|| StratlabError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "unknown symbol".into(),
            })
    }

    fn submit_order(&mut self, symbol: &str, side: Side, quantity: f64) -> Result<()> {
        if self.offline {
            return Err(StratlabError::OrderRejected {
                symbol: symbol.to_string(),
                reason: "exchange offline".into(),
            });
        }
        if !(quantity > 0.0 && quantity.is_finite()) {
            return Err(StratlabError::OrderRejected {
                symbol: symbol.to_string(),
                reason: format!("invalid quantity {quantity}"),
            });
        }
        self.orders.push(OrderRecord {
            symbol: symbol.to_string(),
            side,
            quantity,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_returns_loaded_series() {
        let exchange =
            PaperExchange::new().with_series(PriceSeries::from_prices("BTC/USD", [1.0, 2.0]));
        assert_eq!(exchange.fetch("BTC/USD").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn fetch_unknown_symbol_is_data_unavailable() {
        let err = PaperExchange::new().fetch("DOGE/USD").err().unwrap();
        match err {
            StratlabError::DataUnavailable { symbol, .. } => assert_eq!(symbol, "DOGE/USD"),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn push_price_appends() {
        let mut exchange = PaperExchange::new();
        exchange.push_price("ETH/USD", 10.0);
        exchange.push_price("ETH/USD", 11.0);
        assert_eq!(exchange.fetch("ETH/USD").unwrap(), vec![10.0, 11.0]);
    }

    #[test]
    fn offline_exchange_rejects_everything() {
        let mut exchange = PaperExchange::new();
        exchange.push_price("BTC/USD", 1.0);
        exchange.set_offline(true);
        assert!(exchange.fetch("BTC/USD").is_err());
        assert!(exchange.submit_order("BTC/USD", Side::Buy, 1.0).is_err());
        assert!(exchange.orders().is_empty());
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let mut exchange = PaperExchange::new();
        let err = exchange.submit_order("BTC/USD", Side::Sell, 0.0).err().unwrap();
        assert!(matches!(err, StratlabError::OrderRejected { .. }));
    }
}
