use std::sync::Arc;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};
use smartstring::alias::String;

use crate::error::{Error, Result};
use crate::{DEFAULT_MAX_WORD_LENGTH, DEFAULT_TOTAL};

/// Source of the word statistics used to score candidate words
///
/// Implementations must be cheap to query from many threads at once: a single segmentation
/// issues lookups from every worker filling a row of the search table.
pub trait LanguageModel: Send + Sync {
    /// Frequency of `word`, or 0 if the word is unknown
    fn unigram(&self, word: &str) -> f64;

    /// Joint frequency of `current` following `previous`, or 0 if the pair is unknown
    fn bigram(&self, previous: &str, current: &str) -> f64;

    /// Total word count of the corpus the frequencies were taken from
    fn total(&self) -> f64;

    /// Normalize raw input before it is segmented
    fn clean(&self, text: &str) -> std::string::String {
        crate::clean::clean(text)
    }

    /// Longest word the segmenter should consider
    fn max_word_length(&self) -> usize {
        DEFAULT_MAX_WORD_LENGTH
    }
}

/// In-memory unigram and bigram tables
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug)]
pub struct Corpus {
    unigrams: HashMap<String, f64>,
    bigrams: HashMap<(String, String), f64>,
    total: f64,
    limit: usize,
}

impl Corpus {
    /// Create `Corpus` from the given iterators
    ///
    /// Note: the `String` types used in this API are defined in the `smartstring` crate. Any
    /// `&str` or `String` can be converted into the `String` used here by calling `into()` on it.
    pub fn from_iters<U, B>(unigrams: U, bigrams: B) -> Self
    where
        U: IntoIterator<Item = (String, f64)>,
        B: IntoIterator<Item = ((String, String), f64)>,
    {
        Self::from_maps(
            unigrams.into_iter().collect(),
            bigrams.into_iter().collect(),
        )
    }

    /// Create `Corpus` from the given hashmaps (using ahash)
    ///
    /// The corpus total starts out as [`DEFAULT_TOTAL`]; use [`Corpus::set_total()`] to change it.
    /// The maximum word length is the length of the longest unigram, up to
    /// [`DEFAULT_MAX_WORD_LENGTH`].
    pub fn from_maps(
        unigrams: HashMap<String, f64>,
        bigrams: HashMap<(String, String), f64>,
    ) -> Self {
        let limit = match unigrams.keys().map(|word| word.chars().count()).max() {
            Some(longest) if longest > 0 => longest.min(DEFAULT_MAX_WORD_LENGTH),
            _ => DEFAULT_MAX_WORD_LENGTH,
        };

        log::debug!(
            "built corpus with {} unigrams and {} bigrams, longest word {}",
            unigrams.len(),
            bigrams.len(),
            limit
        );

        Self {
            unigrams,
            bigrams,
            total: DEFAULT_TOTAL,
            limit,
        }
    }

    /// Customize the relative score by setting the `total`
    pub fn set_total(&mut self, total: f64) -> Result<()> {
        self.total = check_total(total)?;
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl LanguageModel for Corpus {
    fn unigram(&self, word: &str) -> f64 {
        self.unigrams.get(word).copied().unwrap_or(0.0)
    }

    fn bigram(&self, previous: &str, current: &str) -> f64 {
        self.bigrams
            .get(&(previous.into(), current.into()))
            .copied()
            .unwrap_or(0.0)
    }

    fn total(&self) -> f64 {
        self.total
    }

    fn max_word_length(&self) -> usize {
        self.limit
    }
}

impl<M: LanguageModel + ?Sized> LanguageModel for &M {
    fn unigram(&self, word: &str) -> f64 {
        (**self).unigram(word)
    }

    fn bigram(&self, previous: &str, current: &str) -> f64 {
        (**self).bigram(previous, current)
    }

    fn total(&self) -> f64 {
        (**self).total()
    }

    fn clean(&self, text: &str) -> std::string::String {
        (**self).clean(text)
    }

    fn max_word_length(&self) -> usize {
        (**self).max_word_length()
    }
}

impl<M: LanguageModel + ?Sized> LanguageModel for Box<M> {
    fn unigram(&self, word: &str) -> f64 {
        (**self).unigram(word)
    }

    fn bigram(&self, previous: &str, current: &str) -> f64 {
        (**self).bigram(previous, current)
    }

    fn total(&self) -> f64 {
        (**self).total()
    }

    fn clean(&self, text: &str) -> std::string::String {
        (**self).clean(text)
    }

    fn max_word_length(&self) -> usize {
        (**self).max_word_length()
    }
}

impl<M: LanguageModel + ?Sized> LanguageModel for Arc<M> {
    fn unigram(&self, word: &str) -> f64 {
        (**self).unigram(word)
    }

    fn bigram(&self, previous: &str, current: &str) -> f64 {
        (**self).bigram(previous, current)
    }

    fn total(&self) -> f64 {
        (**self).total()
    }

    fn clean(&self, text: &str) -> std::string::String {
        (**self).clean(text)
    }

    fn max_word_length(&self) -> usize {
        (**self).max_word_length()
    }
}

pub(crate) fn check_total(total: f64) -> Result<f64> {
    match total.is_finite() && total > 0.0 {
        true => Ok(total),
        false => Err(Error::InvalidTotal(total)),
    }
}

pub type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
