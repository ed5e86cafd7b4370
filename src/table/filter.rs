//! Row filters
//!
//! Every filter borrows its input and returns a new table; inputs are never
//! mutated. Filtering on a column the table does not have is a column-lookup
//! error. Within a present column, a row that lacks the key (possible after a
//! merge) reads as `Null` and fails every predicate.

use super::{Table, Value};
use crate::error::{BiotabError, BiotabResult};

/// Per-row mean of a quality-score list; an empty list counts as 0
pub(crate) fn average_quality(scores: &[i64]) -> f64 {
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<i64>() as f64 / scores.len() as f64
    }
}

impl Table {
    fn filter_rows<P>(&self, predicate: P) -> Table
    where
        P: Fn(&super::Row) -> bool,
    {
        Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| predicate(row))
                .cloned()
                .collect(),
        }
    }

    /// Keep rows where `row[column] == value`
    pub fn filter_by_column_value(
        &self,
        column: &str,
        value: impl Into<Value>,
    ) -> BiotabResult<Table> {
        self.require_column(column)?;
        let value = value.into();
        Ok(self.filter_rows(|row| row.get(column) == Some(&value)))
    }

    /// Keep rows whose `CHROM` equals the given chromosome name
    pub fn filter_by_chromosome(&self, chromosome: &str) -> BiotabResult<Table> {
        self.filter_by_column_value("CHROM", chromosome)
    }

    /// Keep rows whose `QUAL` is at least `threshold`; a null `QUAL` fails
    pub fn filter_by_quality(&self, threshold: f64) -> BiotabResult<Table> {
        self.require_column("QUAL")?;
        Ok(self.filter_rows(|row| {
            row.get("QUAL")
                .and_then(Value::as_f64)
                .is_some_and(|q| q >= threshold)
        }))
    }

    /// Keep rows whose per-base `quality` scores average at least
    /// `threshold`; a record with no scores averages 0
    pub fn filter_fastq_by_quality(&self, threshold: f64) -> BiotabResult<Table> {
        self.require_column("quality")?;

        // reject non-list cells up front so the filter is all-or-nothing
        for row in &self.rows {
            if !matches!(row.get("quality"), Some(Value::IntList(_))) {
                return Err(BiotabError::InvalidInput(
                    "quality column must hold per-base score lists".to_string(),
                ));
            }
        }

        Ok(self.filter_rows(|row| match row.get("quality") {
            Some(Value::IntList(scores)) => average_quality(scores) >= threshold,
            _ => false,
        }))
    }

    /// Keep rows with `start_pos <= POS <= end_pos`, inclusive on both ends
    pub fn filter_by_position_range(
        &self,
        start_pos: i64,
        end_pos: i64,
    ) -> BiotabResult<Table> {
        self.require_column("POS")?;
        Ok(self.filter_rows(|row| {
            row.get("POS")
                .and_then(Value::as_i64)
                .is_some_and(|pos| pos >= start_pos && pos <= end_pos)
        }))
    }

    /// Keep rows whose `attributes` mapping has `attribute` with `value`
    /// among the values mapped to it
    pub fn filter_by_attribute(&self, attribute: &str, value: &str) -> BiotabResult<Table> {
        self.require_column("attributes")?;
        Ok(self.filter_rows(|row| {
            row.get("attributes")
                .and_then(Value::as_map)
                .and_then(|attrs| attrs.get(attribute))
                .is_some_and(|v| attribute_value_matches(v, value))
        }))
    }
}

fn attribute_value_matches(cell: &Value, needle: &str) -> bool {
    match cell {
        Value::Str(s) => s == needle,
        Value::StrList(xs) => xs.iter().any(|s| s == needle),
        Value::IntList(xs) => xs.iter().any(|x| x.to_string() == needle),
        Value::FloatList(xs) => xs.iter().any(|x| x.to_string() == needle),
        Value::Int(_) | Value::Float(_) | Value::Bool(_) => cell.to_string() == needle,
        Value::Null | Value::Map(_) => false,
    }
}
