//! Flat-file export of tables

use super::{Row, Table, Value};
use crate::error::{BiotabError, BiotabResult};
use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Output format for [`Table::save`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    /// Delimited text output
    Csv,
    /// Spreadsheet output
    Xlsx,
}

impl SaveFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

impl FromStr for SaveFormat {
    type Err = BiotabError;

    fn from_str(s: &str) -> BiotabResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(BiotabError::Configuration(format!(
                "Unsupported file format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl Table {
    /// Write the table to `path` in the given format, one line/row per table
    /// row under a header row of column names
    pub fn save<P: AsRef<Path>>(&self, path: P, format: SaveFormat) -> BiotabResult<()> {
        let path = path.as_ref();
        match format {
            SaveFormat::Csv => self.save_csv(path)?,
            SaveFormat::Xlsx => self.save_xlsx(path)?,
        }
        debug!(
            rows = self.len(),
            format = %format,
            path = %path.display(),
            "saved table"
        );
        Ok(())
    }

    fn save_csv(&self, path: &Path) -> BiotabResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(self.columns())?;
        for row in self.rows() {
            let record: Vec<String> = self
                .columns()
                .iter()
                .map(|column| cell_text(row, column))
                .collect();
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn save_xlsx(&self, path: &Path) -> BiotabResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, name) in self.columns().iter().enumerate() {
            worksheet.write_string(0, col as u16, name.as_str())?;
        }
        for (r, row) in self.rows().iter().enumerate() {
            for (c, column) in self.columns().iter().enumerate() {
                let row_num = (r + 1) as u32;
                let col_num = c as u16;
                match row.get(column) {
                    Some(Value::Int(n)) => {
                        worksheet.write_number(row_num, col_num, *n as f64)?;
                    }
                    Some(Value::Float(x)) => {
                        worksheet.write_number(row_num, col_num, *x)?;
                    }
                    Some(Value::Bool(b)) => {
                        worksheet.write_boolean(row_num, col_num, *b)?;
                    }
                    Some(Value::Null) | None => {}
                    Some(other) => {
                        worksheet.write_string(row_num, col_num, other.to_string())?;
                    }
                }
            }
        }

        workbook.save(path)?;
        Ok(())
    }

    /// Read a delimited file written by [`Table::save`] back into a table
    ///
    /// All cells come back as strings; the first line is taken as the header
    /// row of column names.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> BiotabResult<Table> {
        let mut reader = csv::Reader::from_path(path)?;
        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Row = columns
                .iter()
                .zip(record.iter())
                .map(|(column, field)| (column.clone(), Value::Str(field.to_string())))
                .collect();
            rows.push(row);
        }

        Ok(Table { columns, rows })
    }
}

fn cell_text(row: &Row, column: &str) -> String {
    row.get(column).unwrap_or(&Value::Null).to_string()
}
