//! Tabular loading, filtering, and summarizing of common bioinformatics
//! formats
//!
//! biotab loads FASTA, FASTQ, VCF, and GFF3 files into a uniform row-oriented
//! [`Table`], offers column-based filters and summary statistics over it, and
//! exports it to CSV or XLSX. Format parsing is delegated to needletail and
//! noodles; this crate is the glue between those parsers and a plain table
//! value.
//!
//! ```no_run
//! use biotab::{load_fastq, SaveFormat};
//!
//! # fn main() -> biotab::BiotabResult<()> {
//! let reads = load_fastq("reads.fastq")?;
//! let good = reads.filter_fastq_by_quality(30.0)?;
//! println!("{:?}", good.summarize_fastq());
//! good.save("good_reads.csv", SaveFormat::Csv)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod formats;
pub mod io;
pub mod table;

// Re-export the working surface
pub use error::{BiotabError, BiotabResult};
pub use formats::{alt_to_string, load_fasta, load_fastq, load_gff, load_vcf};
pub use io::ChunkedReader;
pub use table::{
    attributes_to_table, merge, AttrMap, FastqSummary, Row, SaveFormat, Table, TableSummary,
    Value,
};
