use serde::{Deserialize, Serialize};

/// Ordered, append-only price observations for one symbol (latest last).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: String,
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            prices: Vec::new(),
        }
    }

    pub fn from_prices(symbol: impl Into<String>, prices: impl IntoIterator<Item = f64>) -> Self {
        Self {
            symbol: symbol.into(),
            prices: prices.into_iter().collect(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn push(&mut self, price: f64) {
        self.prices.push(price);
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn latest(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
