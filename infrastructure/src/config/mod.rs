//! Configuration file loading for petmatch
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `PETMATCH_<SECTION>__<KEY>` (e.g. `PETMATCH_API__BASE_URL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./petmatch.toml` or `./.petmatch.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/petmatch/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileApiConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileQuizConfig,
};
pub use loader::ConfigLoader;
