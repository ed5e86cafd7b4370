//! VCF loading

use super::{open_text, require_file};
use crate::error::{BiotabError, BiotabResult};
use crate::table::{AttrMap, Row, Table, Value};
use noodles::vcf::{
    self,
    variant::record::Ids as _,
    variant::record_buf::info::field::{value::Array as InfoArray, Value as InfoValue},
};
use std::path::Path;
use tracing::debug;

/// Load a VCF file into a table with columns `CHROM`, `POS`, `ID`, `REF`,
/// `ALT`, `QUAL`, `FILTER`, `INFO`
///
/// `ALT` is the list of alternate alleles, `QUAL` is null for a missing
/// quality, and `INFO` is a nested mapping of the record's typed INFO
/// fields.
pub fn load_vcf<P: AsRef<Path>>(path: P) -> BiotabResult<Table> {
    let path = path.as_ref();
    require_file(path)?;

    let mut reader = vcf::io::Reader::new(open_text(path)?);
    let header = reader
        .read_header()
        .map_err(|e| BiotabError::Parse(e.to_string()))?;

    let mut table = Table::new(
        ["CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    );

    for result in reader.record_bufs(&header) {
        let record = result.map_err(|e| BiotabError::Parse(e.to_string()))?;

        let pos = record
            .variant_start()
            .map(|p| Value::Int(p.get() as i64))
            .unwrap_or(Value::Null);

        let ids: Vec<String> = record.ids().iter().map(|id| id.to_string()).collect();
        let id = if ids.is_empty() {
            Value::Null
        } else {
            Value::Str(ids.join(";"))
        };

        let alts: Vec<String> = record
            .alternate_bases()
            .as_ref()
            .iter()
            .map(|alt| alt.to_string())
            .collect();

        let qual = record
            .quality_score()
            .map(|q| Value::Float(q as f64))
            .unwrap_or(Value::Null);

        let filters: Vec<String> = record.filters().as_ref().iter().map(|f| f.to_string()).collect();
        let filter = if filters.is_empty() {
            Value::Null
        } else {
            Value::Str(filters.join(";"))
        };

        let mut info = AttrMap::new();
        for (key, value) in record.info().as_ref() {
            info.insert(key.to_string(), info_value(value.as_ref()));
        }

        let mut row = Row::new();
        row.insert(
            "CHROM".to_string(),
            Value::Str(record.reference_sequence_name().to_string()),
        );
        row.insert("POS".to_string(), pos);
        row.insert("ID".to_string(), id);
        row.insert(
            "REF".to_string(),
            Value::Str(record.reference_bases().to_string()),
        );
        row.insert("ALT".to_string(), Value::StrList(alts));
        row.insert("QUAL".to_string(), qual);
        row.insert("FILTER".to_string(), filter);
        row.insert("INFO".to_string(), Value::Map(info));
        table.push_row(row);
    }

    debug!(records = table.len(), path = %path.display(), "loaded VCF");
    Ok(table)
}

/// Render an ALT allele list as the comma-separated string used by the VCF
/// text representation
pub fn alt_to_string(alt: &[String]) -> String {
    alt.join(",")
}

/// Convert a typed INFO field into a cell value; a key with no value is a
/// flag and reads as true
fn info_value(value: Option<&InfoValue>) -> Value {
    match value {
        None | Some(InfoValue::Flag) => Value::Bool(true),
        Some(InfoValue::Integer(n)) => Value::Int(*n as i64),
        Some(InfoValue::Float(x)) => Value::Float(*x as f64),
        Some(InfoValue::Character(c)) => Value::Str(c.to_string()),
        Some(InfoValue::String(s)) => Value::Str(s.to_string()),
        Some(InfoValue::Array(array)) => array_value(array),
    }
}

fn array_value(array: &InfoArray) -> Value {
    match array {
        InfoArray::Integer(xs) => {
            Value::IntList(xs.iter().flatten().map(|&n| n as i64).collect())
        }
        InfoArray::Float(xs) => {
            Value::FloatList(xs.iter().flatten().map(|&x| x as f64).collect())
        }
        InfoArray::Character(xs) => {
            Value::StrList(xs.iter().flatten().map(|c| c.to_string()).collect())
        }
        InfoArray::String(xs) => {
            Value::StrList(xs.iter().flatten().map(|s| s.to_string()).collect())
        }
    }
}
