//! CSS selectors for dblp proceedings listing pages
//!
//! dblp marks each paper as an `li.entry.inproceedings` element with nested
//! spans for the title and the author names.

use lazy_static::lazy_static;
use scraper::Selector;

// Helper macro to parse selectors safely at startup
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

lazy_static! {
    /// One paper entry on the listing page
    static ref ENTRY: Selector = parse_selector!("li.entry.inproceedings");

    /// Paper title inside an entry
    static ref TITLE: Selector = parse_selector!("span.title");

    /// Author name inside an entry (repeated per author)
    static ref AUTHOR_NAME: Selector =
        parse_selector!("span[itemprop=\"author\"] span[itemprop=\"name\"]");

    /// Any link inside an entry; filtered by href afterwards
    static ref LINK: Selector = parse_selector!("a[href]");
}

/// Selector set for one listing page
pub struct EntrySelectors {
    pub entry: &'static Selector,
    pub title: &'static Selector,
    pub author_name: &'static Selector,
    pub link: &'static Selector,
}

impl EntrySelectors {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entry: &ENTRY,
            title: &TITLE,
            author_name: &AUTHOR_NAME,
            link: &LINK,
        }
    }
}

impl Default for EntrySelectors {
    fn default() -> Self {
        Self::new()
    }
}
