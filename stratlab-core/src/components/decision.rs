//! Trading decision strategies — buy/sell verdicts from a price history.
//!
//! A strategy sees only the price slice (latest last), never the exchange or the
//! bot. Both verdicts are computed independently; resolving a buy+sell tie is
//! the caller's job (see `trading::TradingBot`).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StratlabError};
use crate::registry::Registry;

/// Independent buy and sell verdicts for one price history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub should_buy: bool,
    pub should_sell: bool,
}

impl Decision {
    pub fn hold() -> Self {
        Self::default()
    }

    /// Both verdicts fired at once.
    pub fn is_tie(&self) -> bool {
        self.should_buy && self.should_sell
    }
}

/// Trait for buy/sell decision strategies.
pub trait DecisionStrategy: Send + Sync {
    /// Human-readable name (e.g., "average").
    fn name(&self) -> &str;

    /// Decide on `prices` (ordered, latest last).
    ///
    /// Fails with `InsufficientData` when `prices` is empty.
    fn decide(&self, prices: &[f64]) -> Result<Decision>;
}

/// Registry of decision strategies keyed by name.
pub type DecisionRegistry = Registry<dyn DecisionStrategy>;

fn latest(strategy: &str, prices: &[f64]) -> Result<f64> {
    prices
        .last()
        .copied()
        .ok_or_else(|| StratlabError::InsufficientData {
            strategy: strategy.to_string(),
            symbol: None,
        })
}

// ─── Windowed average ────────────────────────────────────────────────

/// Parameters for [`WindowedAverage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowedAverageConfig {
    pub window_size: usize,
}

impl Default for WindowedAverageConfig {
    fn default() -> Self {
        Self { window_size: 3 }
    }
}

/// Buys below the trailing mean, sells above it.
///
/// The mean covers the last `min(window_size, prices.len())` observations,
/// latest included. A price equal to the mean is a hold.
#[derive(Debug, Clone)]
pub struct WindowedAverage {
    config: WindowedAverageConfig,
}

impl WindowedAverage {
    pub fn new(config: WindowedAverageConfig) -> Result<Self> {
        if config.window_size == 0 {
            return Err(StratlabError::ConfigurationError(
                "window_size must be >= 1".into(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> WindowedAverageConfig {
        self.config
    }
}

impl DecisionStrategy for WindowedAverage {
    fn name(&self) -> &str {
        "average"
    }

    fn decide(&self, prices: &[f64]) -> Result<Decision> {
        let last = latest(self.name(), prices)?;
        let start = prices.len().saturating_sub(self.config.window_size);
        let window = &prices[start..];
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        Ok(Decision {
            should_buy: last < mean,
            should_sell: last > mean,
        })
    }
}

// ─── Price band ──────────────────────────────────────────────────────

/// Parameters for [`PriceBand`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBandConfig {
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for PriceBandConfig {
    fn default() -> Self {
        Self {
            min_price: 32_000.0,
            max_price: 33_000.0,
        }
    }
}

/// Buys strictly below `min_price`, sells strictly above `max_price`.
#[derive(Debug, Clone)]
pub struct PriceBand {
    config: PriceBandConfig,
}

impl PriceBand {
    /// Rejects non-finite bounds and `min_price > max_price`.
    pub fn new(config: PriceBandConfig) -> Result<Self> {
        if !config.min_price.is_finite() || !config.max_price.is_finite() {
            return Err(StratlabError::ConfigurationError(format!(
                "price band bounds must be finite (min_price={}, max_price={})",
                config.min_price, config.max_price
            )));
        }
        if config.min_price > config.max_price {
            return Err(StratlabError::ConfigurationError(format!(
                "min_price {} exceeds max_price {}",
                config.min_price, config.max_price
            )));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> PriceBandConfig {
        self.config
    }
}

impl DecisionStrategy for PriceBand {
    fn name(&self) -> &str {
        "min_max"
    }

    fn decide(&self, prices: &[f64]) -> Result<Decision> {
        let last = latest(self.name(), prices)?;
        Ok(Decision {
            should_buy: last < self.config.min_price,
            should_sell: last > self.config.max_price,
        })
    }
}

// ─── Registry ────────────────────────────────────────────────────────

/// Parameters for every built-in decision strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionParams {
    #[serde(default)]
    pub average: WindowedAverageConfig,
    #[serde(default)]
    pub band: PriceBandConfig,
}

/// Registry with `"average"` and `"min_max"` bound to configured instances.
///
/// Invalid parameters fail here, before any decision is made.
pub fn standard_decisions(params: &DecisionParams) -> Result<DecisionRegistry> {
    let mut registry = DecisionRegistry::new("decision strategy");
    registry.register_instance("average", Arc::new(WindowedAverage::new(params.average)?));
    registry.register_instance("min_max", Arc::new(PriceBand::new(params.band)?));
    Ok(registry)
}
