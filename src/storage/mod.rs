pub mod table;

pub use table::{Column, TrendingTable};

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, ScrapingError};

pub trait OutputFormatter {
    fn format_table(&self, table: &TrendingTable) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// CSV with a leading, unnamed row-index column.
pub struct CsvFormatter;

/// Column-oriented JSON: `{"owner": [...], "name": [...], ...}`.
pub struct JsonFormatter;

impl CsvFormatter {
    fn escape_csv_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    pub fn header(table: &TrendingTable) -> String {
        let mut header = vec![String::new()];
        header.extend(table.columns().iter().map(|c| c.header().to_string()));
        header.join(",")
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_table(&self, table: &TrendingTable) -> Result<String> {
        let mut output = Self::header(table);
        output.push('\n');

        for (index, row) in table.rows().enumerate() {
            let mut line = vec![index.to_string()];
            line.extend(row.iter().map(|value| Self::escape_csv_field(value)));
            output.push_str(&line.join(","));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "csv"
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_table(&self, table: &TrendingTable) -> Result<String> {
        serde_json::to_string_pretty(&table.column_mapping())
            .map_err(|e| ScrapingError::StorageError(format!("JSON serialization failed: {}", e)))
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Formats the whole table first, then replaces whatever is at `path`.
/// Returns the number of bytes written.
pub fn write_table(path: &Path, table: &TrendingTable, formatter: &dyn OutputFormatter) -> Result<u64> {
    let content = formatter.format_table(table)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating output directory: {:?}", parent);
            fs::create_dir_all(parent)
                .map_err(|e| ScrapingError::StorageError(format!("Failed to create directory: {}", e)))?;
        }
    }

    fs::write(path, content.as_bytes())
        .map_err(|e| ScrapingError::StorageError(format!("Failed to write {:?}: {}", path, e)))?;

    info!("Wrote {} rows to {:?}", table.len(), path);
    Ok(content.len() as u64)
}
