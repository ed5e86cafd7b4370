//! FASTQ loading

use super::require_file;
use crate::error::{BiotabError, BiotabResult};
use crate::table::{Row, Table, Value};
use needletail::parse_fastx_file;
use std::path::Path;
use tracing::debug;

/// Phred+33 offset used by modern FASTQ quality strings
const PHRED_OFFSET: u8 = 33;

/// Load a FASTQ file (optionally gzip-compressed) into a table with columns
/// `id`, `sequence`, `quality`
///
/// `quality` holds one decoded Phred score per base.
pub fn load_fastq<P: AsRef<Path>>(path: P) -> BiotabResult<Table> {
    let path = path.as_ref();
    require_file(path)?;

    let mut reader =
        parse_fastx_file(path).map_err(|e| BiotabError::Parse(e.to_string()))?;

    let mut table = Table::new(vec![
        "id".to_string(),
        "sequence".to_string(),
        "quality".to_string(),
    ]);

    while let Some(result) = reader.next() {
        let record = result.map_err(|e| BiotabError::Parse(e.to_string()))?;

        let qual = record.qual().ok_or_else(|| {
            BiotabError::Parse(format!(
                "record without quality scores in {}; not a FASTQ file",
                path.display()
            ))
        })?;
        let scores: Vec<i64> = qual
            .iter()
            .map(|&q| q.saturating_sub(PHRED_OFFSET) as i64)
            .collect();

        let id = String::from_utf8_lossy(record.id())
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        let sequence = String::from_utf8_lossy(&record.seq()).to_string();

        let mut row = Row::new();
        row.insert("id".to_string(), Value::Str(id));
        row.insert("sequence".to_string(), Value::Str(sequence));
        row.insert("quality".to_string(), Value::IntList(scores));
        table.push_row(row);
    }

    debug!(records = table.len(), path = %path.display(), "loaded FASTQ");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fastq_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".fastq")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_fastq_decodes_phred_scores() {
        // 'I' = Phred 40, '+' = Phred 10
        let file = fastq_file("@read1\nACG\n+\nIII\n@read2\nTGC\n+\n+++\n");
        let table = load_fastq(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.value(0, "id"), &Value::from("read1"));
        assert_eq!(table.value(0, "sequence"), &Value::from("ACG"));
        assert_eq!(table.value(0, "quality"), &Value::IntList(vec![40, 40, 40]));
        assert_eq!(table.value(1, "quality"), &Value::IntList(vec![10, 10, 10]));
    }

    #[test]
    fn test_load_then_filter_by_average_quality() {
        let file = fastq_file("@read1\nACG\n+\nIII\n@read2\nTGC\n+\n+++\n");
        let table = load_fastq(file.path()).unwrap();

        let filtered = table.filter_fastq_by_quality(30.0).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.value(0, "id"), &Value::from("read1"));
    }

    #[test]
    fn test_load_fastq_missing_file() {
        assert!(matches!(
            load_fastq("/nonexistent/reads.fastq"),
            Err(BiotabError::Io(_))
        ));
    }

    #[test]
    fn test_load_fastq_truncated_record() {
        let file = fastq_file("@read1\nACGT\n+\nII\n");
        assert!(matches!(
            load_fastq(file.path()),
            Err(BiotabError::Parse(_))
        ));
    }
}
