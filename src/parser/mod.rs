//! HTML parsing and paper extraction
//!
//! dblp proceedings pages list one `li.entry.inproceedings` element per paper
//! with nested spans for the title and author names. The parser pulls those
//! fields plus a canonical link (DOI preferred) into [`crate::models::Paper`]
//! records.

pub mod listing;
pub mod selectors;

pub use listing::ListingParser;
pub use selectors::EntrySelectors;
