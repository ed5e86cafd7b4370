//! Incremental file reading

pub mod chunked;

pub use chunked::ChunkedReader;
