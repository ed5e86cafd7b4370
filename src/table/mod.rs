//! Row-oriented tables and the operations over them
//!
//! A [`Table`] is an ordered set of column names plus a sequence of rows,
//! each row an ordered mapping from column name to [`Value`]. Loaders build
//! tables, filters take a table and return a new one (inputs are never
//! mutated), summaries and save consume them.

pub mod filter;
pub mod save;
pub mod summary;
pub mod value;

pub use save::SaveFormat;
pub use summary::{FastqSummary, TableSummary};
pub use value::{AttrMap, Value};

use crate::error::{BiotabError, BiotabResult};
use indexmap::IndexMap;
use serde::Serialize;

/// One record: an ordered mapping from column name to cell value
pub type Row = IndexMap<String, Value>;

/// An ordered sequence of uniform-schema records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given column set
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from rows, taking the column set as the union of row
    /// keys in first-seen order
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Table { columns, rows }
    }

    /// Append a row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names, in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// True if the column exists in this table's schema
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Cell at (row, column); `Null` when the row lacks the key
    pub fn value(&self, row: usize, column: &str) -> &Value {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&Value::Null)
    }

    /// Fail with a column-lookup error unless the column exists
    pub(crate) fn require_column(&self, column: &str) -> BiotabResult<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(BiotabError::Column(column.to_string()))
        }
    }

    /// Project onto an ordered list of columns
    ///
    /// Every requested column must exist; the first absent one is reported
    /// as a column-lookup error before any row is copied.
    pub fn select_columns(&self, columns: &[&str]) -> BiotabResult<Table> {
        for column in columns {
            self.require_column(column)?;
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|&c| {
                        (
                            c.to_string(),
                            row.get(c).cloned().unwrap_or(Value::Null),
                        )
                    })
                    .collect()
            })
            .collect();

        Ok(Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }
}

/// Concatenate tables, preserving input order and re-indexing rows
///
/// The result's column set is the union of the inputs' columns in first-seen
/// order. A row coming from a table that lacks one of those columns reads as
/// `Null` there. The result's row count is the sum of the inputs' row counts.
pub fn merge(tables: &[Table]) -> Table {
    let mut columns: Vec<String> = Vec::new();
    for table in tables {
        for column in &table.columns {
            if !columns.iter().any(|c| c == column) {
                columns.push(column.clone());
            }
        }
    }

    let rows = tables
        .iter()
        .flat_map(|t| t.rows.iter().cloned())
        .collect();

    Table { columns, rows }
}

/// Convert an attribute mapping into a one-row table whose columns are the
/// attribute names
pub fn attributes_to_table(attributes: &AttrMap) -> Table {
    let columns: Vec<String> = attributes.keys().cloned().collect();
    let row: Row = attributes
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Table {
        columns,
        rows: vec![row],
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{row, variant_table};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_rows_infers_columns_in_order() {
        let table = variant_table();
        assert_eq!(table.columns(), &["CHROM".to_string(), "POS".to_string()]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_select_columns_projection() {
        let table = variant_table();
        let projected = table.select_columns(&["POS"]).unwrap();

        assert_eq!(projected.columns(), &["POS".to_string()]);
        assert_eq!(projected.len(), table.len());
        assert_eq!(projected.value(0, "POS"), &Value::Int(100));
        // input untouched
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn test_select_columns_reorders() {
        let table = variant_table();
        let projected = table.select_columns(&["POS", "CHROM"]).unwrap();
        assert_eq!(projected.columns(), &["POS".to_string(), "CHROM".to_string()]);
    }

    #[test]
    fn test_select_columns_missing_is_error() {
        let table = variant_table();
        match table.select_columns(&["CHROM", "QUAL"]) {
            Err(BiotabError::Column(name)) => assert_eq!(name, "QUAL"),
            other => panic!("Expected Column error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_concatenates_in_order() {
        let t1 = variant_table();
        let t2 = Table::from_rows(vec![row(&[
            ("CHROM", Value::from("chr3")),
            ("POS", Value::Int(400)),
        ])]);

        let merged = merge(&[t1.clone(), t2]);
        assert_eq!(merged.len(), t1.len() + 1);
        // first rows(T1) rows equal T1 in order
        for (i, r) in t1.rows().iter().enumerate() {
            assert_eq!(&merged.rows()[i], r);
        }
        assert_eq!(merged.value(3, "CHROM"), &Value::from("chr3"));
    }

    #[test]
    fn test_merge_fills_missing_columns_with_null() {
        let t1 = Table::from_rows(vec![row(&[("id", Value::from("s1"))])]);
        let t2 = Table::from_rows(vec![row(&[("POS", Value::Int(5))])]);

        let merged = merge(&[t1, t2]);
        assert_eq!(merged.columns(), &["id".to_string(), "POS".to_string()]);
        assert_eq!(merged.value(0, "POS"), &Value::Null);
        assert_eq!(merged.value(1, "id"), &Value::Null);
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        let merged = merge(&[]);
        assert!(merged.is_empty());
        assert!(merged.columns().is_empty());
    }

    #[test]
    fn test_attributes_to_table() {
        let mut attrs = AttrMap::new();
        attrs.insert(
            "ID".to_string(),
            Value::StrList(vec!["gene1".to_string()]),
        );
        attrs.insert(
            "Name".to_string(),
            Value::StrList(vec!["Gene ABC".to_string()]),
        );

        let table = attributes_to_table(&attrs);
        assert_eq!(table.len(), 1);
        assert!(table.has_column("ID"));
        assert_eq!(
            table.value(0, "Name"),
            &Value::StrList(vec!["Gene ABC".to_string()])
        );
    }
}
