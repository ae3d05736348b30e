//! Pluggable components — behaviours selected at runtime behind one signature.
//!
//! - Ordering strategy: decides the processing order of queued tickets
//! - Decision strategy: turns a price history into buy/sell verdicts
//! - Exporter factory: pairs a video and an audio codec for a quality tier
//!
//! Each role is a single trait; concrete behaviours are looked up by key in a
//! [`Registry`](crate::registry::Registry).

pub mod decision;
pub mod export;
pub mod factory;
pub mod ordering;

pub use decision::{
    standard_decisions, Decision, DecisionParams, DecisionRegistry, DecisionStrategy, PriceBand,
    PriceBandConfig, WindowedAverage, WindowedAverageConfig,
};
pub use export::{
    AudioExporter, DestinationStore, DirectoryStore, ExportArtifact, MediaKind, MemoryStore,
    VideoExporter,
};
pub use factory::{run_export, ExportBundle, ExportJob, ExportReport, ExportTiers, ExporterFactory};
pub use ordering::{
    standard_orderings, Drain, Fifo, Filo, OrderingRegistry, OrderingStrategy, RandomOrder,
    RandomOrderConfig,
};
