//! Summary statistics over loaded tables

use super::filter::average_quality;
use super::{Table, Value};
use serde::{Deserialize, Serialize};

/// Summary of a FASTQ table's per-base quality scores
///
/// Aggregates are taken over per-row statistics, with a record whose quality
/// list is empty contributing 0 for that row. Over a table with no rows the
/// aggregates are NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastqSummary {
    pub total_sequences: usize,
    pub mean_quality: f64,
    pub min_quality: f64,
    pub max_quality: f64,
}

/// Schema-aware summary of any loaded table
///
/// `total_rows` and `columns` are always present; the optional fields appear
/// when the table carries the corresponding column and are skipped in
/// serialized output otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    pub total_rows: usize,
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_quality: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sequences: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_position: Option<i64>,
}

impl Table {
    /// Summarize per-base quality scores of a FASTQ table
    pub fn summarize_fastq(&self) -> FastqSummary {
        let mut means = Vec::with_capacity(self.len());
        let mut mins = Vec::with_capacity(self.len());
        let mut maxs = Vec::with_capacity(self.len());

        for row in self.rows() {
            let scores: &[i64] = match row.get("quality") {
                Some(Value::IntList(scores)) => scores,
                _ => &[],
            };
            means.push(average_quality(scores));
            mins.push(scores.iter().min().copied().unwrap_or(0) as f64);
            maxs.push(scores.iter().max().copied().unwrap_or(0) as f64);
        }

        let (min_quality, max_quality) = if self.is_empty() {
            (f64::NAN, f64::NAN)
        } else {
            (
                mins.iter().cloned().fold(f64::INFINITY, f64::min),
                maxs.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            )
        };

        FastqSummary {
            total_sequences: self.len(),
            mean_quality: mean(&means),
            min_quality,
            max_quality,
        }
    }

    /// Summarize row count, schema, and the aggregates the schema supports
    pub fn summarize(&self) -> TableSummary {
        let mean_quality = self.has_column("QUAL").then(|| {
            let quals: Vec<f64> = self
                .rows()
                .iter()
                .filter_map(|row| row.get("QUAL").and_then(Value::as_f64))
                .collect();
            mean(&quals)
        });

        let total_sequences = self.has_column("sequence").then(|| self.len());

        let positions: Vec<i64> = self
            .rows()
            .iter()
            .filter_map(|row| row.get("POS").and_then(Value::as_i64))
            .collect();
        let (min_position, max_position) = if self.has_column("POS") {
            (
                positions.iter().min().copied(),
                positions.iter().max().copied(),
            )
        } else {
            (None, None)
        };

        TableSummary {
            total_rows: self.len(),
            columns: self.columns().to_vec(),
            mean_quality,
            total_sequences,
            min_position,
            max_position,
        }
    }
}

/// Mean of a slice; NaN over no values, matching the behavior of the
/// dataframe libraries this mirrors
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        f64::NAN
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
