//! Output formatters for CLI commands.
//!
//! Provides consistent formatting across all CLI commands.

use crate::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use stubgen_cli::OutputFormat;
/// use stubgen_cli::formatters::format_output;
///
/// #[derive(Serialize)]
/// struct Summary {
///     modules: usize,
/// }
///
/// let output = format_output(&Summary { modules: 2 }, OutputFormat::Text)?;
/// assert_eq!(output, r#"{"modules":2}"#);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Text => serde_json::to_string(data)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        count: usize,
    }

    #[test]
    fn test_json_is_pretty() {
        let sample = Sample {
            name: "main".to_string(),
            count: 3,
        };
        let output = format_output(&sample, OutputFormat::Json).unwrap();
        assert!(output.contains("\n  \"name\": \"main\""));
    }

    #[test]
    fn test_text_is_single_line() {
        let sample = Sample {
            name: "main".to_string(),
            count: 3,
        };
        let output = format_output(&sample, OutputFormat::Text).unwrap();
        assert_eq!(output, r#"{"name":"main","count":3}"#);
    }
}
