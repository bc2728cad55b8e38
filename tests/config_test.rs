//! Configuration loading and validation tests

use dblp_trends::config::Config;
use std::io::Write;

#[test]
fn test_builtin_table_matches_expected_conferences() {
    let config = Config::default();
    assert!(config.validate().is_ok());

    let keys: Vec<&str> = config.conferences.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["aaai", "cvpr", "iccv"]);

    let iccv = config.conference("iccv").unwrap();
    assert!(iccv.biennial_odd);
    assert_eq!(iccv.years().collect::<Vec<_>>(), vec![2019, 2021, 2023]);
}

#[test]
fn test_from_file() {
    let toml = r#"
[crawler]
delay_ms = 500
request_timeout_secs = 10
user_agent = "test-agent"

[output]
dir = "out"
top_keywords = 10
wordcloud_max_words = 50

[logging]
level = "debug"
format = "text"

[[conferences]]
key = "neurips"
name = "NeurIPS"
url_template = "https://dblp.org/db/conf/nips/neurips{year}.html"
start_year = 2021
end_year = 2023
"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.crawler.delay_ms, 500);
    assert_eq!(config.output.top_keywords, 10);

    let neurips = config.conference("neurips").unwrap();
    assert!(!neurips.biennial_odd); // defaults to annual
    assert_eq!(neurips.url_for(2022), "https://dblp.org/db/conf/nips/neurips2022.html");
}

#[test]
fn test_from_file_rejects_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not toml }").unwrap();
    assert!(Config::from_file(file.path()).is_err());
}

#[test]
fn test_missing_year_placeholder_fails_validation() {
    let mut config = Config::default();
    config.conferences[0].url_template = "https://dblp.org/db/conf/aaai/latest.html".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_inverted_year_range_fails_validation() {
    let mut config = Config::default();
    config.conferences[0].start_year = 2025;
    config.conferences[0].end_year = 2020;
    assert!(config.validate().is_err());
}
