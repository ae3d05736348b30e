//! Trading bot — one decision cycle per symbol against an exchange.
//!
//! Each cycle runs `Idle → FetchPrices → Decide → {Buy | Sell | Hold} → Idle`:
//!
//! 1. Fetch the symbol's price history. A fetch failure or an empty history
//!    aborts this cycle only.
//! 2. Ask the decision strategy once for both verdicts.
//! 3. Submit at most one order. Buy wins when both verdicts fire.
//!
//! Nothing is retried here; retry policy belongs to the exchange.

pub mod exchange;

use std::sync::Arc;

use serde::Serialize;

use crate::components::decision::{Decision, DecisionStrategy};
use crate::error::{Result, StratlabError};

pub use exchange::{Exchange, OrderRecord, PaperExchange, Side};

/// Default order size per trade.
pub const DEFAULT_QUANTITY: f64 = 10.0;

/// The single external action a cycle takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    /// Buy priority: `should_buy` wins a tie with `should_sell`.
    pub fn from_decision(decision: Decision) -> Self {
        if decision.should_buy {
            Self::Buy
        } else if decision.should_sell {
            Self::Sell
        } else {
            Self::Hold
        }
    }
}

/// Result of one completed cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    pub symbol: String,
    pub decision: Decision,
    pub action: TradeAction,
    pub latest_price: f64,
    /// Quantity submitted, `0.0` on hold.
    pub quantity: f64,
}

/// Runs decision cycles against an exchange with an injected strategy.
pub struct TradingBot<E: Exchange> {
    exchange: E,
    strategy: Arc<dyn DecisionStrategy>,
    quantity: f64,
}

impl<E: Exchange> TradingBot<E> {
    pub fn new(exchange: E, strategy: Arc<dyn DecisionStrategy>) -> Self {
        Self {
            exchange,
            strategy,
            quantity: DEFAULT_QUANTITY,
        }
    }

    /// Override the order size. Must be positive and finite.
    pub fn with_quantity(mut self, quantity: f64) -> Result<Self> {
        if !(quantity > 0.0 && quantity.is_finite()) {
            return Err(StratlabError::ConfigurationError(format!(
                "order quantity must be positive, got {quantity}"
            )));
        }
        self.quantity = quantity;
        Ok(self)
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn strategy(&self) -> &dyn DecisionStrategy {
        self.strategy.as_ref()
    }

    pub fn exchange(&self) -> &E {
        &self.exchange
    }

    pub fn exchange_mut(&mut self) -> &mut E {
        &mut self.exchange
    }

    pub fn into_exchange(self) -> E {
        self.exchange
    }

    /// Run one cycle for `symbol`.
    pub fn run(&mut self, symbol: &str) -> Result<CycleReport> {
        let span = tracing::info_span!("trading_cycle", symbol, strategy = self.strategy.name());
        let _guard = span.enter();

        let prices = self.exchange.fetch(symbol)?;
        tracing::debug!(observations = prices.len(), "prices fetched");
        let Some(&latest_price) = prices.last() else {
            return Err(StratlabError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "empty price series".into(),
            });
        };

        let decision = self.strategy.decide(&prices).map_err(|err| match err {
            StratlabError::InsufficientData { strategy, .. } => StratlabError::InsufficientData {
                strategy,
                symbol: Some(symbol.to_string()),
            },
            other => other,
        })?;
        if decision.is_tie() {
            tracing::debug!("buy and sell both signalled; buy takes priority");
        }

        let action = TradeAction::from_decision(decision);
        let quantity = match action {
            TradeAction::Buy => {
                self.exchange.submit_order(symbol, Side::Buy, self.quantity)?;
                tracing::info!(quantity = self.quantity, latest_price, "bought");
                self.quantity
            }
            TradeAction::Sell => {
                self.exchange.submit_order(symbol, Side::Sell, self.quantity)?;
                tracing::info!(quantity = self.quantity, latest_price, "sold");
                self.quantity
            }
            TradeAction::Hold => {
                tracing::info!(latest_price, "no action needed");
                0.0
            }
        };

        Ok(CycleReport {
            symbol: symbol.to_string(),
            decision,
            action,
            latest_price,
            quantity,
        })
    }

    /// Run one cycle per symbol. A failing symbol does not stop the rest.
    pub fn run_all<I, S>(&mut self, symbols: I) -> Vec<(String, Result<CycleReport>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        symbols
            .into_iter()
            .map(|symbol| {
                let symbol = symbol.as_ref();
                let result = self.run(symbol);
                if let Err(err) = &result {
                    tracing::warn!(symbol, error = %err, "cycle aborted");
                }
                (symbol.to_string(), result)
            })
            .collect()
    }
}
