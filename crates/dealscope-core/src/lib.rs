//! Core domain model and configuration for DealScope.
//!
//! Holds the plain-data types that flow through the analysis pipeline
//! (startup profiles, investor preferences, documents, signals, results),
//! the fixed scoring dimension vocabulary, and env-driven app configuration.
//! No I/O beyond reading environment variables.

mod app_config;
mod config;
mod dimension;
mod model;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use dimension::Dimension;
pub use model::{
    AnalysisResult, DocumentRecord, InvestorPreferences, PublicSignal, StartupProfile,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
