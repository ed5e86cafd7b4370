//! Format loaders
//!
//! One loader per supported format, each delegating byte-level parsing to an
//! external parser and returning a row-oriented [`Table`](crate::Table) with
//! one row per record/feature.

pub mod fasta;
pub mod fastq;
pub mod gff;
pub mod vcf;

pub use fasta::load_fasta;
pub use fastq::load_fastq;
pub use gff::load_gff;
pub use vcf::{alt_to_string, load_vcf};

use crate::error::{BiotabError, BiotabResult};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a text file for reading, decompressing transparently when the path
/// carries a `.gz` extension
pub(crate) fn open_text(path: &Path) -> BiotabResult<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Surface a missing path as an I/O error before handing it to a parser
/// whose own error type would obscure it
pub(crate) fn require_file(path: &Path) -> BiotabResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(BiotabError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            path.display().to_string(),
        )))
    }
}
