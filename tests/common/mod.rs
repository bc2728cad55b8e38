//! Common test utilities

use dblp_trends::config::{Config, ConferenceConfig, CrawlerConfig, LoggingConfig, OutputConfig};
use dblp_trends::models::Paper;
use std::path::Path;

/// dblp-shaped proceedings page with the given paper entries
pub fn listing_page(entries: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>dblp: test proceedings</title></head>
<body>
<ul class="publ-list">
{}
</ul>
</body>
</html>"#,
        entries.join("\n")
    )
}

/// One paper entry in dblp markup
pub fn paper_entry(title: &str, authors: &[&str], links: &[&str]) -> String {
    let authors_html: String = authors
        .iter()
        .map(|name| {
            format!(r#"<span itemprop="author"><span itemprop="name">{name}</span></span>"#)
        })
        .collect();
    let links_html: String = links
        .iter()
        .map(|href| format!(r#"<nav class="publ"><a href="{href}">[link]</a></nav>"#))
        .collect();
    format!(
        r#"<li class="entry inproceedings">{links_html}<cite>{authors_html}<span class="title">{title}</span></cite></li>"#
    )
}

/// Config with a single test conference pointed at a mock server
#[allow(dead_code)]
pub fn test_config(output_dir: &Path, start_year: i32, end_year: i32) -> Config {
    Config {
        crawler: CrawlerConfig {
            delay_ms: 1,
            request_timeout_secs: 5,
            user_agent: "dblp-trends-test".to_string(),
        },
        output: OutputConfig {
            dir: output_dir.to_path_buf(),
            top_keywords: 20,
            wordcloud_max_words: 200,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "text".to_string(),
        },
        conferences: vec![ConferenceConfig {
            key: "test".to_string(),
            name: "TEST".to_string(),
            url_template: "/db/conf/test/test{year}.html".to_string(),
            start_year,
            end_year,
            biennial_odd: false,
        }],
    }
}

/// Create a test paper with default values
#[allow(dead_code)]
pub fn create_test_paper(year: &str) -> Paper {
    Paper {
        title: "Deep Learning for Test Coverage".to_string(),
        authors: "Alice Example; Bob Example".to_string(),
        year: year.to_string(),
        conference: "TEST".to_string(),
        link: "https://doi.org/10.1000/test".to_string(),
    }
}
