//! Proceedings listing page parser
//!
//! Extracts one [`Paper`] per entry on a dblp proceedings page. Missing titles
//! or authors fall back to a sentinel rather than dropping the entry; a page
//! with no entries at all is reported as [`ParseError::NoEntries`] so the
//! caller can flag a likely page-structure change.

use scraper::Html;

use crate::error::ParseError;
use crate::models::Paper;
use crate::parser::selectors::EntrySelectors;

/// Sentinel used when a structural field is absent
const UNKNOWN: &str = "unknown";

/// Listing page parser for dblp proceedings
pub struct ListingParser {
    selectors: EntrySelectors,
}

impl ListingParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selectors: EntrySelectors::new(),
        }
    }

    /// Extract all paper entries from one proceedings page
    ///
    /// The `conference` and `year` of every returned record are taken from
    /// the fetch request, never from the page.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::NoEntries` when no entry matched the expected
    /// structure. The caller decides whether that is a layout change or a
    /// legitimately empty year.
    pub fn parse(
        &self,
        html: &str,
        conference: &str,
        year: i32,
    ) -> Result<Vec<Paper>, ParseError> {
        let document = Html::parse_document(html);

        let mut papers = Vec::new();
        for entry in document.select(self.selectors.entry) {
            let title = entry
                .select(self.selectors.title)
                .next()
                .map(|el| el.text().collect::<String>().trim().to_string())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string());

            let authors: Vec<String> = entry
                .select(self.selectors.author_name)
                .map(|el| el.text().collect::<String>().trim().to_string())
                .filter(|name| !name.is_empty())
                .collect();
            let authors = if authors.is_empty() {
                UNKNOWN.to_string()
            } else {
                authors.join("; ")
            };

            let link = self.select_link(&entry);

            papers.push(Paper::new(title, authors, conference, year, link));
        }

        if papers.is_empty() {
            return Err(ParseError::NoEntries);
        }

        Ok(papers)
    }

    /// Pick the canonical link for an entry: DOI first, then the dblp record
    /// page, else empty
    fn select_link(&self, entry: &scraper::ElementRef<'_>) -> String {
        let hrefs: Vec<&str> = entry
            .select(self.selectors.link)
            .filter_map(|el| el.value().attr("href"))
            .collect();

        if let Some(doi) = hrefs.iter().find(|href| href.contains("doi.org")) {
            return (*doi).to_string();
        }

        if let Some(record) = hrefs.iter().find(|href| href.contains("dblp.org/rec/")) {
            return (*record).to_string();
        }

        String::new()
    }
}

impl Default for ListingParser {
    fn default() -> Self {
        Self::new()
    }
}
