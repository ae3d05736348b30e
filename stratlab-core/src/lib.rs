//! StratLab Core — runtime-selectable strategies and factories.
//!
//! This crate contains:
//! - Domain types (support tickets, ticket ids, price series)
//! - A keyed registry of interchangeable behaviours
//! - Ticket ordering strategies (FIFO, FILO, seeded random)
//! - Trading decision strategies (windowed average, price band)
//! - Exporter factories pairing video and audio codecs per quality tier
//! - Orchestrators: the support desk and the trading bot
//! - TOML configuration and the shared error type

pub mod components;
pub mod config;
pub mod domain;
pub mod error;
pub mod registry;
pub mod rng;
pub mod support;
pub mod trading;

pub use error::{Result, StratlabError};
