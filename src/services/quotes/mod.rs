//! Quote dataset and random selection.
//!
//! The dataset is a JSON array of `{"quote": ..., "author": ...}` records,
//! either the one compiled into the binary or a user-supplied file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::models::quote::Quote;
use crate::models::settings::Settings;
use crate::services::random::RandomSource;

const BUNDLED_QUOTES: &str = include_str!("../../../assets/quotes.json");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Selecting from an empty dataset has no defined result
    #[error("quote dataset is empty")]
    EmptyDataset,
    #[error("quote index {index} is out of range for {len} quotes")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Pick a uniformly random quote from `dataset`.
pub fn pick<'a>(dataset: &'a [Quote], rng: &mut dyn RandomSource) -> Result<&'a Quote, QuoteError> {
    if dataset.is_empty() {
        return Err(QuoteError::EmptyDataset);
    }
    Ok(&dataset[pick_index(dataset.len(), rng)])
}

fn pick_index(len: usize, rng: &mut dyn RandomSource) -> usize {
    // Guard against a source that ignores its bound.
    rng.next_below(len).min(len - 1)
}

/// A non-empty, read-only collection of quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCatalog {
    quotes: Vec<Quote>,
}

impl QuoteCatalog {
    pub fn new(quotes: Vec<Quote>) -> Result<Self, QuoteError> {
        if quotes.is_empty() {
            return Err(QuoteError::EmptyDataset);
        }
        Ok(Self { quotes })
    }

    /// The dataset shipped with the application.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_QUOTES).context("bundled quote dataset is invalid")
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let quotes: Vec<Quote> = serde_json::from_str(data).context("failed to parse quotes")?;
        Ok(Self::new(quotes)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read quotes from {}", path.display()))?;
        let catalog = Self::from_json(&data)
            .with_context(|| format!("failed to load quotes from {}", path.display()))?;
        log::info!("Loaded {} quotes from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The configured dataset file, or the bundled quotes when none is set.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        match &settings.quotes_file {
            Some(path) => Self::load_from_path(path),
            None => {
                let catalog = Self::bundled()?;
                log::info!("Loaded {} bundled quotes", catalog.len());
                Ok(catalog)
            }
        }
    }

    /// Never fails: emptiness is rejected at construction.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> &Quote {
        &self.quotes[self.pick_index(rng)]
    }

    pub fn pick_index(&self, rng: &mut dyn RandomSource) -> usize {
        pick_index(self.quotes.len(), rng)
    }

    pub fn get(&self, index: usize) -> Result<&Quote, QuoteError> {
        self.quotes.get(index).ok_or(QuoteError::IndexOutOfRange {
            index,
            len: self.quotes.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }
}
