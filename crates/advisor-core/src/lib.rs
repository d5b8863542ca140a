//! Phone Advisor core — errors and configuration.

pub mod config;
pub mod error;

pub use config::{AdvisorConfig, GenerationConfig, RankingConfig, ResolverConfig};
pub use error::{Error, Result};
