//! Maximum-likelihood word segmentation
//!
//! Splits text without word boundaries (`"thecrispairof"`) into its most likely sequence of
//! words (`["the", "crisp", "air", "of"]`), using unigram and bigram frequencies from a
//! [`LanguageModel`]. The search is a dynamic program over all boundary placements with no word
//! longer than the configured maximum, filled one row at a time on the rayon thread pool.

use smartstring::alias::String;

pub mod clean;
mod error;
mod model;
mod parse;
mod search;
#[cfg(any(test, feature = "test-cases"))]
pub mod test_cases;
#[cfg(any(test, feature = "__test_data"))]
pub mod test_data;

pub use error::{Error, Result};
pub use model::{Corpus, HashMap, LanguageModel};
pub use parse::{read_bigrams, read_unigrams};

use search::Text;

/// Splits text into words according to a [`LanguageModel`]
pub struct Segmenter<M> {
    model: M,
    limit: usize,
}

impl<M: LanguageModel> Segmenter<M> {
    /// Create a `Segmenter` using the model's maximum word length
    pub fn new(model: M) -> Result<Self> {
        let limit = model.max_word_length();
        Self::with_max_word_length(model, limit)
    }

    /// Create a `Segmenter` that considers no words longer than `limit` characters
    pub fn with_max_word_length(model: M, limit: usize) -> Result<Self> {
        model::check_total(model.total())?;
        Ok(Self {
            model,
            limit: check_limit(limit)?,
        })
    }

    /// Segment `text` into its most likely sequence of words
    ///
    /// The text is cleaned with [`LanguageModel::clean()`] first; the concatenation of the
    /// returned words is always equal to the cleaned text. Returns an empty list if nothing is
    /// left after cleaning.
    pub fn segment(&self, text: &str) -> Vec<String> {
        match self.segment_scored(text) {
            Some(found) => found.into_words(),
            None => Vec::new(),
        }
    }

    /// Segment `text`, keeping the log-likelihood of the result
    ///
    /// Unlike [`Segmenter::segment()`], this distinguishes empty input (an empty
    /// `Segmentation` with score 0) from input for which no segmentation could be found (`None`).
    pub fn segment_scored(&self, text: &str) -> Option<Segmentation> {
        let cleaned = self.model.clean(text);
        if cleaned.is_empty() {
            return Some(Segmentation::default());
        }

        let text = Text::new(&cleaned);
        let found = search::run(&self.model, &text, self.limit);
        match &found {
            Some(found) => log::debug!(
                "segmented {} characters (max word length {}) into {} words, score {}",
                text.len(),
                self.limit,
                found.len(),
                found.score
            ),
            None => log::warn!(
                "no segmentation found for {} characters (max word length {})",
                text.len(),
                self.limit
            ),
        }
        found
    }

    /// Log-likelihood of `word` following `previous`
    ///
    /// Without a `previous` word (or with an empty one), this is the unigram probability of
    /// `word`, or a length-based penalty if the word is unknown.
    pub fn score(&self, word: &str, previous: Option<&str>) -> f64 {
        search::score(&self.model, word, previous)
    }

    /// Customize the maximum word length
    ///
    /// Fails, leaving the current value in place, if `limit` is 0.
    pub fn set_max_word_length(&mut self, limit: usize) -> Result<()> {
        self.limit = check_limit(limit)?;
        Ok(())
    }

    pub fn max_word_length(&self) -> usize {
        self.limit
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

fn check_limit(limit: usize) -> Result<usize> {
    match limit {
        0 => Err(Error::InvalidMaxWordLength),
        _ => Ok(limit),
    }
}

/// The words found by [`Segmenter::segment_scored()`] and their total log-likelihood
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segmentation {
    words: Vec<String>,
    score: f64,
}

impl Segmentation {
    pub fn iter(&self) -> impl Iterator<Item = &str> + ExactSizeIterator {
        self.words.iter().map(|word| word.as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of the log10 scores of all words, each in the context of its predecessor
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Default maximum word length; almost all words in natural language are shorter
pub const DEFAULT_MAX_WORD_LENGTH: usize = 24;

/// Word count of the Google Web Trillion Word Corpus
pub const DEFAULT_TOTAL: f64 = 1_024_908_267_229.0;

/// Previous word used for the first word of the text
pub const SENTENCE_START: &str = "<s>";

/// Added to the log-likelihood of words following a known bigram
pub const BIGRAM_BONUS: f64 = 0.4;
