//! Rendering of algorithm results for the command line.

use std::fmt::Display;

use serde::Serialize;

use crate::errors::Result;
use crate::matrix::Matrix;
use crate::types::OutputFormat;

/// Renders a sequence as one item per line, or as a JSON array.
pub fn format_sequence<T: Display + Serialize>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(items)?),
    }
}

/// Renders a single value as plain text or JSON.
pub fn format_scalar<T: Display + Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
    }
}

/// Renders a matrix as space-separated rows, or as a JSON array of rows.
pub fn format_matrix(matrix: &Matrix, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(matrix)?),
    }
}

/// Renders a search result, using `-1` for "not found".
pub fn format_search_index(index: Option<usize>, format: OutputFormat) -> Result<String> {
    let value: i64 = match index {
        Some(i) => i as i64,
        None => -1,
    };
    format_scalar(&value, format)
}
