//! Infrastructure layer for petmatch
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod classifier;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use classifier::{ConfiguredClassifier, RuleBasedClassifier};
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileQuizConfig,
};
pub use http::HttpCatalogService;
