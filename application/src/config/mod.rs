//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ApiConfig`] - catalog service base URL and request timeout
//! - [`ClassifierChoice`] - which classifier completes a quiz round

pub mod api_config;
pub mod quiz_config;

pub use api_config::{ApiConfig, DEFAULT_BASE_URL};
pub use quiz_config::ClassifierChoice;
