//! Output formatting functions.

pub mod pretty;

pub use pretty::Pretty;

use crate::cli::OutputFormat;

/// Format a value for output.
pub fn format_output<T>(value: &T, format: OutputFormat) -> String
where
    T: serde::Serialize + Pretty + ?Sized,
{
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => value.pretty(),
    }
}

/// Format the result of a write. Pretty output is headed by `label`.
pub fn format_change<T>(label: &str, value: &T, format: OutputFormat) -> String
where
    T: serde::Serialize + Pretty + ?Sized,
{
    match format {
        OutputFormat::Json => format_output(value, format),
        OutputFormat::Pretty => format!("{}:\n{}", label, value.pretty()),
    }
}
