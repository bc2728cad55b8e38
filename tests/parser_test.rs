//! Parser tests against dblp-shaped listing fixtures

mod common;

use common::{listing_page, paper_entry};
use dblp_trends::error::ParseError;
use dblp_trends::parser::ListingParser;

#[test]
fn test_extracts_every_well_formed_entry() {
    let html = listing_page(&[
        paper_entry("Adversarial Examples Revisited", &["Ada Lovelace"], &[]),
        paper_entry(
            "Scaling Laws for Vision Transformers",
            &["Grace Hopper", "Alan Turing"],
            &["https://doi.org/10.1000/1"],
        ),
        paper_entry(
            "Graph Neural Networks in Production",
            &["Edsger Dijkstra"],
            &["https://dblp.org/rec/conf/test/D24.html"],
        ),
    ]);

    let parser = ListingParser::new();
    let papers = parser.parse(&html, "TEST", 2024).unwrap();

    assert_eq!(papers.len(), 3);
    for paper in &papers {
        assert!(!paper.title.is_empty());
        assert!(!paper.authors.is_empty());
        assert_eq!(paper.year, "2024");
        assert_eq!(paper.conference, "TEST");
    }
    assert_eq!(papers[1].authors, "Grace Hopper; Alan Turing");
}

#[test]
fn test_link_prefers_doi_over_record() {
    let html = listing_page(&[paper_entry(
        "Paper With Both Links",
        &["Alice"],
        &[
            "https://dblp.org/rec/conf/test/A24.html",
            "https://doi.org/10.1000/both",
        ],
    )]);

    let parser = ListingParser::new();
    let papers = parser.parse(&html, "TEST", 2024).unwrap();
    assert_eq!(papers[0].link, "https://doi.org/10.1000/both");
}

#[test]
fn test_link_record_only() {
    let html = listing_page(&[paper_entry(
        "Paper With Record Link",
        &["Alice"],
        &["https://dblp.org/rec/conf/test/A24.html"],
    )]);

    let parser = ListingParser::new();
    let papers = parser.parse(&html, "TEST", 2024).unwrap();
    assert_eq!(papers[0].link, "https://dblp.org/rec/conf/test/A24.html");
}

#[test]
fn test_link_empty_when_absent() {
    let html = listing_page(&[paper_entry("Paper Without Links", &["Alice"], &[])]);

    let parser = ListingParser::new();
    let papers = parser.parse(&html, "TEST", 2024).unwrap();
    assert_eq!(papers[0].link, "");
}

#[test]
fn test_page_without_entries_reports_mismatch() {
    let html = r#"<html><body><h1>dblp</h1><p>No proceedings here.</p></body></html>"#;

    let parser = ListingParser::new();
    let result = parser.parse(html, "TEST", 2024);
    assert!(matches!(result, Err(ParseError::NoEntries)));
}

#[test]
fn test_editor_entries_not_counted_as_papers() {
    let html = listing_page(&[
        r#"<li class="entry editor"><span class="title">Proceedings Front Matter</span></li>"#
            .to_string(),
        paper_entry("An Actual Paper", &["Alice"], &[]),
    ]);

    let parser = ListingParser::new();
    let papers = parser.parse(&html, "TEST", 2024).unwrap();
    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title, "An Actual Paper");
}
