//! Quote model.
//!
//! Quotes come from a fixed dataset and are never edited at runtime; the
//! view only ever selects one.

use serde::{Deserialize, Serialize};

/// A quotation and the person it is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quotation itself (named `quote` in the dataset files)
    pub quote: String,
    pub author: String,
}

impl Quote {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }

    /// Single-line form used for sharing: `"text" - author`.
    pub fn attributed(&self) -> String {
        format!("\"{}\" - {}", self.quote.trim(), self.author.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_record() {
        let quote: Quote =
            serde_json::from_str(r#"{"quote": "Stay hungry.", "author": "Steve Jobs"}"#).unwrap();
        assert_eq!(quote, Quote::new("Stay hungry.", "Steve Jobs"));
    }

    #[test]
    fn test_attributed() {
        let quote = Quote::new(" Less is more. ", "Ludwig Mies van der Rohe");
        assert_eq!(quote.attributed(), "\"Less is more.\" - Ludwig Mies van der Rohe");
    }
}
