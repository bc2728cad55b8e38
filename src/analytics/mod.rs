//! Descriptive analytics over crawled paper records

pub mod forecast;
pub mod keywords;
pub mod yearly;

pub use forecast::{predict, Forecast, GrowthRate};
pub use keywords::{keyword_frequencies, top_keywords, WordFrequencies};
pub use yearly::count_by_year;
