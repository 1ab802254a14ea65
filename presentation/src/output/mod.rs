//! Output formatting

pub mod console;
pub mod formatter;
pub mod json;

use petmatch_domain::OutputFormat;

/// Pick the formatter for `format`
pub fn formatter_for(
    format: OutputFormat,
    description_width: usize,
) -> Box<dyn formatter::OutputFormatter> {
    match format {
        OutputFormat::Table => Box::new(console::ConsoleFormatter::new(description_width)),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
