//! Error taxonomy shared by every component in the crate.
//!
//! Selection errors (`UnknownKey`, `UnknownTier`) are recoverable at the
//! boundary: re-prompt or reselect. Data errors abort the current cycle only.
//! Configuration errors surface at construction, never at decision time.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by registries, strategies, factories, and orchestrators.
#[derive(Debug, Error)]
pub enum StratlabError {
    #[error("unknown {role} key '{key}' (available: {})", .available.join(", "))]
    UnknownKey {
        role: String,
        key: String,
        available: Vec<String>,
    },

    #[error("unknown export tier '{tier}' (available: {})", .available.join(", "))]
    UnknownTier {
        tier: String,
        available: Vec<String>,
    },

    #[error(
        "{strategy}: not enough price data{}",
        .symbol.as_deref().map(|s| format!(" for {s}")).unwrap_or_default()
    )]
    InsufficientData {
        strategy: String,
        /// Filled in by the trading bot; strategies never see the symbol.
        symbol: Option<String>,
    },

    #[error("no market data for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    #[error("order for {symbol} rejected: {reason}")]
    OrderRejected { symbol: String, reason: String },

    #[error("configuration error: {0}")]
    ConfigurationError(String),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StratlabError {
    /// True for errors the caller can fix by choosing a different key.
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::UnknownKey { .. } | Self::UnknownTier { .. })
    }
}

pub type Result<T> = std::result::Result<T, StratlabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_lists_available_keys() {
        let err = StratlabError::UnknownKey {
            role: "ordering strategy".into(),
            key: "bogus".into(),
            available: vec!["fifo".into(), "filo".into()],
        };
        assert_eq!(
            err.to_string(),
            "unknown ordering strategy key 'bogus' (available: fifo, filo)"
        );
        assert!(err.is_selection_error());
    }

    #[test]
    fn data_errors_are_not_selection_errors() {
        let err = StratlabError::DataUnavailable {
            symbol: "BTC/USD".into(),
            reason: "feed offline".into(),
        };
        assert!(!err.is_selection_error());
        assert!(err.to_string().contains("BTC/USD"));
    }

    #[test]
    fn insufficient_data_names_symbol_when_known() {
        let bare = StratlabError::InsufficientData {
            strategy: "average".into(),
            symbol: None,
        };
        assert_eq!(bare.to_string(), "average: not enough price data");

        let located = StratlabError::InsufficientData {
            strategy: "average".into(),
            symbol: Some("ETH/USD".into()),
        };
        assert_eq!(located.to_string(), "average: not enough price data for ETH/USD");
    }
}
