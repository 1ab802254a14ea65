//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["petmatch.toml", ".petmatch.toml"];

/// Prefix for environment overrides
const ENV_PREFIX: &str = "PETMATCH_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PETMATCH_*` environment variables (`__` separates section and key)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./petmatch.toml` or `./.petmatch.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/petmatch/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/petmatch/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("petmatch").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {}<SECTION>__<KEY>", ENV_PREFIX));

        if let Some(path) = config_path {
            let tag = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{}] Explicit: {}", tag, path.display()));
        }

        if let Some(path) = Self::project_config_path() {
            lines.push(format!("  [FOUND] Project: {}", path.display()));
        } else {
            lines.push("  [     ] Project: ./petmatch.toml or ./.petmatch.toml".to_string());
        }

        if let Some(path) = Self::global_config_path() {
            let tag = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", tag, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use petmatch_domain::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("petmatch"));
    }

    #[test]
    fn test_project_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "petmatch.toml",
                r#"
[api]
base_url = "http://project.local:8000"
timeout_secs = 4

[output]
format = "json"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.base_url, "http://project.local:8000");
            assert_eq!(config.output.format, Some(OutputFormat::Json));

            jail.set_env("PETMATCH_API__BASE_URL", "http://env.local:9000");
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.base_url, "http://env.local:9000");
            assert_eq!(config.api.timeout_secs, Some(4));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_beats_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".petmatch.toml", "[quiz]\nclassifier = \"remote\"\n")?;

            let mut explicit = tempfile::NamedTempFile::new().map_err(|e| e.to_string())?;
            writeln!(explicit, "[quiz]\nclassifier = \"local\"").map_err(|e| e.to_string())?;

            let config = ConfigLoader::load(Some(explicit.path())).map_err(|e| *e)?;
            assert_eq!(config.quiz.classifier, "local");
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_mentions_env_prefix() {
        let lines = ConfigLoader::describe_sources(None);
        assert!(lines.iter().any(|l| l.contains("PETMATCH_")));
        assert!(lines.last().unwrap().contains("Default"));
    }
}
