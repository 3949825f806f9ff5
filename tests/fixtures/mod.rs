// Test fixtures - reusable test data
// Provides consistent quotes and catalogs across all test files

#![allow(dead_code)]

use quote_canvas::models::quote::Quote;
use quote_canvas::services::quotes::QuoteCatalog;

/// The single-entry dataset used by the first end-to-end scenario
pub fn single_quote() -> Vec<Quote> {
    vec![Quote::new("A", "X")]
}

/// A small dataset with distinct quotes and authors
pub fn three_quotes() -> Vec<Quote> {
    vec![
        Quote::new("Simplicity is the ultimate sophistication.", "Leonardo da Vinci"),
        Quote::new("Well done is better than well said.", "Benjamin Franklin"),
        Quote::new("Quality is not an act, it is a habit.", "Aristotle"),
    ]
}

/// `count` generated quotes, `Quote 0` by `Author 0` and so on
pub fn numbered_quotes(count: usize) -> Vec<Quote> {
    (0..count)
        .map(|i| Quote::new(format!("Quote {}", i), format!("Author {}", i)))
        .collect()
}

pub fn catalog(quotes: Vec<Quote>) -> QuoteCatalog {
    QuoteCatalog::new(quotes).expect("fixture datasets are non-empty")
}
