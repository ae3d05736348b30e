//! Workspace configuration, stored as TOML.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! [support]
//! strategy = "fifo"
//! seed = 42
//!
//! [trading]
//! strategy = "average"
//! quantity = 10.0
//! symbols = ["BTC/USD"]
//!
//! [trading.average]
//! window_size = 3
//!
//! [trading.band]
//! min_price = 32000.0
//! max_price = 33000.0
//!
//! [export]
//! tier = "low"
//! folder = "/usr/tmp/video"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::decision::{standard_decisions, DecisionParams, DecisionRegistry};
use crate::components::ordering::{standard_orderings, OrderingRegistry};
use crate::domain::TicketIdGenerator;
use crate::error::{Result, StratlabError};
use crate::rng::{RngHierarchy, ORDERING_STREAM, TICKET_ID_STREAM};
use crate::support::SupportDesk;
use crate::trading::DEFAULT_QUANTITY;

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StratlabConfig {
    pub support: SupportConfig,
    pub trading: TradingConfig,
    pub export: ExportConfig,
}

/// Support desk settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    /// Ordering strategy key.
    pub strategy: String,
    /// Master seed for ticket ids and the random ordering. `None` = entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            strategy: "fifo".into(),
            seed: None,
        }
    }
}

impl SupportConfig {
    /// Built-in orderings; `"random"` is seeded from the `ordering` stream.
    pub fn orderings(&self) -> OrderingRegistry {
        let seed = self
            .seed
            .map(|s| RngHierarchy::new(s).sub_seed(ORDERING_STREAM));
        standard_orderings(seed)
    }

    /// Empty desk; ticket ids are seeded from the `ticket_ids` stream.
    pub fn desk(&self) -> SupportDesk {
        match self.seed {
            Some(seed) => SupportDesk::with_id_generator(TicketIdGenerator::from_rng(
                RngHierarchy::new(seed).rng_for(TICKET_ID_STREAM),
            )),
            None => SupportDesk::new(),
        }
    }
}

/// Trading bot settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingConfig {
    /// Decision strategy key.
    pub strategy: String,
    pub quantity: f64,
    pub symbols: Vec<String>,
    #[serde(flatten)]
    pub params: DecisionParams,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            strategy: "average".into(),
            quantity: DEFAULT_QUANTITY,
            symbols: vec!["BTC/USD".into()],
            params: DecisionParams::default(),
        }
    }
}

impl TradingConfig {
    pub fn decisions(&self) -> Result<DecisionRegistry> {
        standard_decisions(&self.params)
    }
}

/// Exporter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub tier: String,
    pub folder: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            tier: "low".into(),
            folder: PathBuf::from("/usr/tmp/video"),
        }
    }
}

impl StratlabConfig {
    /// Load and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| StratlabError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| StratlabError::ConfigurationError(format!("parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| StratlabError::Serialization(format!("serialize config: {e}")))
    }

    /// Check values that would otherwise fail later, at construction time.
    ///
    /// Strategy and tier keys are not checked here; unknown keys surface when
    /// they are resolved.
    pub fn validate(&self) -> Result<()> {
        if !(self.trading.quantity > 0.0 && self.trading.quantity.is_finite()) {
            return Err(StratlabError::ConfigurationError(format!(
                "trading.quantity must be positive, got {}",
                self.trading.quantity
            )));
        }
        standard_decisions(&self.trading.params)?;
        Ok(())
    }
}
