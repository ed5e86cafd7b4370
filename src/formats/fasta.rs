//! FASTA loading

use super::require_file;
use crate::error::{BiotabError, BiotabResult};
use crate::table::{Row, Table, Value};
use needletail::parse_fastx_file;
use std::path::Path;
use tracing::debug;

/// Load a FASTA file (optionally gzip-compressed) into a table with columns
/// `id`, `description`, `sequence`
///
/// `id` is the first whitespace-delimited token of the header line;
/// `description` is the full header line.
pub fn load_fasta<P: AsRef<Path>>(path: P) -> BiotabResult<Table> {
    let path = path.as_ref();
    require_file(path)?;

    let mut reader =
        parse_fastx_file(path).map_err(|e| BiotabError::Parse(e.to_string()))?;

    let mut table = Table::new(vec![
        "id".to_string(),
        "description".to_string(),
        "sequence".to_string(),
    ]);

    while let Some(result) = reader.next() {
        let record = result.map_err(|e| BiotabError::Parse(e.to_string()))?;

        let description = String::from_utf8_lossy(record.id()).to_string();
        let id = description
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        let sequence = String::from_utf8_lossy(&record.seq()).to_string();

        let mut row = Row::new();
        row.insert("id".to_string(), Value::Str(id));
        row.insert("description".to_string(), Value::Str(description));
        row.insert("sequence".to_string(), Value::Str(sequence));
        table.push_row(row);
    }

    debug!(records = table.len(), path = %path.display(), "loaded FASTA");
    Ok(table)
}
