//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use petmatch_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Card descriptions are cut to this many bytes
    pub description_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
            description_width: 60,
        }
    }
}

impl OutputConfig {
    /// A format given on the command line wins over the configured one
    pub fn with_format_override(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Apply the color setting to every `colored` string in the process
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
