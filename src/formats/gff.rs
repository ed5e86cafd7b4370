//! GFF3 loading

use super::{open_text, require_file};
use crate::error::{BiotabError, BiotabResult};
use crate::table::{AttrMap, Row, Table, Value};
use noodles::gff::{self, feature::record_buf::attributes::field::Value as AttrValue};
use std::path::Path;
use tracing::debug;

/// Load a GFF3 file into a table with columns `seqid`, `source`, `type`,
/// `start`, `end`, `score`, `strand`, `attributes`
///
/// `attributes` is a nested mapping from attribute name to the ordered list
/// of its values; `score` is null when the source file has `.` there.
pub fn load_gff<P: AsRef<Path>>(path: P) -> BiotabResult<Table> {
    let path = path.as_ref();
    require_file(path)?;

    let mut reader = gff::io::Reader::new(open_text(path)?);

    let mut table = Table::new(
        [
            "seqid",
            "source",
            "type",
            "start",
            "end",
            "score",
            "strand",
            "attributes",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect(),
    );

    for result in reader.record_bufs() {
        let record = result.map_err(|e| BiotabError::Parse(e.to_string()))?;

        let score = record
            .score()
            .map(|s| Value::Float(s as f64))
            .unwrap_or(Value::Null);

        let mut attributes = AttrMap::new();
        for (key, value) in record.attributes().as_ref() {
            let values = match value {
                AttrValue::String(s) => vec![s.to_string()],
                AttrValue::Array(xs) => xs.iter().map(|s| s.to_string()).collect(),
            };
            attributes.insert(key.to_string(), Value::StrList(values));
        }

        let mut row = Row::new();
        row.insert(
            "seqid".to_string(),
            Value::Str(record.reference_sequence_name().to_string()),
        );
        row.insert(
            "source".to_string(),
            Value::Str(record.source().to_string()),
        );
        row.insert("type".to_string(), Value::Str(record.ty().to_string()));
        row.insert("start".to_string(), Value::Int(record.start().get() as i64));
        row.insert("end".to_string(), Value::Int(record.end().get() as i64));
        row.insert("score".to_string(), score);
        row.insert(
            "strand".to_string(),
            Value::Str(
                match record.strand() {
                    gff::feature::record::Strand::None => ".",
                    gff::feature::record::Strand::Forward => "+",
                    gff::feature::record::Strand::Reverse => "-",
                    gff::feature::record::Strand::Unknown => "?",
                }
                .to_string(),
            ),
        );
        row.insert("attributes".to_string(), Value::Map(attributes));
        table.push_row(row);
    }

    debug!(features = table.len(), path = %path.display(), "loaded GFF");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_GFF: &str = "\
##gff-version 3
chr1\thavana\tgene\t1000\t5000\t.\t+\t.\tID=gene1;Name=ABC1
chr1\thavana\texon\t1000\t1500\t0.9\t+\t.\tID=exon1;Parent=gene1
chr2\tensembl\tgene\t2000\t4000\t.\t-\t.\tID=gene2;Alias=g2,beta2
";

    fn gff_file() -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".gff3").tempfile().unwrap();
        file.write_all(SAMPLE_GFF.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_gff_schema_and_fields() {
        let file = gff_file();
        let table = load_gff(file.path()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.value(0, "seqid"), &Value::from("chr1"));
        assert_eq!(table.value(0, "source"), &Value::from("havana"));
        assert_eq!(table.value(0, "type"), &Value::from("gene"));
        assert_eq!(table.value(0, "start"), &Value::Int(1000));
        assert_eq!(table.value(0, "end"), &Value::Int(5000));
        assert_eq!(table.value(0, "strand"), &Value::from("+"));
    }

    #[test]
    fn test_load_gff_score_nullable() {
        let file = gff_file();
        let table = load_gff(file.path()).unwrap();

        assert_eq!(table.value(0, "score"), &Value::Null);
        assert_eq!(table.value(1, "score"), &Value::Float(0.9f32 as f64));
    }

    #[test]
    fn test_load_gff_attributes_mapping() {
        let file = gff_file();
        let table = load_gff(file.path()).unwrap();

        let attrs = table.value(0, "attributes").as_map().unwrap();
        assert_eq!(
            attrs.get("ID"),
            Some(&Value::StrList(vec!["gene1".to_string()]))
        );
        assert_eq!(
            attrs.get("Name"),
            Some(&Value::StrList(vec!["ABC1".to_string()]))
        );

        // multi-valued attribute keeps its order
        let attrs = table.value(2, "attributes").as_map().unwrap();
        assert_eq!(
            attrs.get("Alias"),
            Some(&Value::StrList(vec![
                "g2".to_string(),
                "beta2".to_string()
            ]))
        );
    }

    #[test]
    fn test_load_gff_then_filter_by_attribute() {
        let file = gff_file();
        let table = load_gff(file.path()).unwrap();

        let filtered = table.filter_by_attribute("Parent", "gene1").unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.value(0, "type"), &Value::from("exon"));
    }

    #[test]
    fn test_load_gff_missing_file() {
        assert!(matches!(
            load_gff("/nonexistent/features.gff3"),
            Err(BiotabError::Io(_))
        ));
    }
}
