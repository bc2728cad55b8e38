//! Flat-file persistence for crawl results

pub mod csv;

pub use csv::{read_papers, write_papers};
