use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use smartstring::alias::String;

use crate::error::{Error, Result};
use crate::model::{Corpus, HashMap};

impl Corpus {
    /// Read a `Corpus` from tab-separated unigram and bigram data
    ///
    /// See [`read_unigrams()`] and [`read_bigrams()`] for the expected formats.
    pub fn from_readers<U: BufRead, B: BufRead>(unigrams: U, bigrams: B) -> Result<Self> {
        Ok(Self::from_maps(
            read_unigrams(unigrams)?,
            read_bigrams(bigrams)?,
        ))
    }

    /// Read a `Corpus` from the given unigram and bigram files
    pub fn from_files(unigrams: impl AsRef<Path>, bigrams: impl AsRef<Path>) -> Result<Self> {
        let (unigrams, bigrams) = (unigrams.as_ref(), bigrams.as_ref());
        log::debug!("loading corpus from {:?} and {:?}", unigrams, bigrams);
        Self::from_readers(
            BufReader::new(File::open(unigrams)?),
            BufReader::new(File::open(bigrams)?),
        )
    }
}

/// Read unigrams, one `word<TAB>count` per line
///
/// Blank lines are skipped.
pub fn read_unigrams(mut reader: impl BufRead) -> Result<HashMap<String, f64>> {
    let mut ln = std::string::String::new();
    let mut i = 0;
    let mut unigrams = HashMap::default();
    loop {
        ln.clear();
        if reader.read_line(&mut ln)? == 0 {
            break;
        }

        i += 1;
        let line = ln.trim();
        if line.is_empty() {
            continue;
        }

        let split = line.find('\t').ok_or_else(|| parse_error(i, "no tab found"))?;
        let word = line[..split].trim_end();
        if word.is_empty() {
            return Err(parse_error(i, "empty word"));
        }

        unigrams.insert(word.into(), count(i, &line[split + 1..])?);
    }

    Ok(unigrams)
}

/// Read bigrams, one `first second<TAB>count` or `first<TAB>second<TAB>count` per line
///
/// Blank lines are skipped.
pub fn read_bigrams(mut reader: impl BufRead) -> Result<HashMap<(String, String), f64>> {
    let mut ln = std::string::String::new();
    let mut i = 0;
    let mut bigrams = HashMap::default();
    loop {
        ln.clear();
        if reader.read_line(&mut ln)? == 0 {
            break;
        }

        i += 1;
        let line = ln.trim();
        if line.is_empty() {
            continue;
        }

        let fields = line.split('\t').collect::<Vec<_>>();
        let (first, second, score) = match fields[..] {
            [words, score] => {
                let mut words = words.split(' ');
                match (words.next(), words.next(), words.next()) {
                    (Some(first), Some(second), None) => (first, second, score),
                    _ => return Err(parse_error(i, "expected two space-separated words")),
                }
            }
            [first, second, score] => (first, second, score),
            _ => return Err(parse_error(i, "expected two or three tab-separated fields")),
        };

        if first.is_empty() || second.is_empty() {
            return Err(parse_error(i, "empty word"));
        }

        bigrams.insert((first.into(), second.into()), count(i, score)?);
    }

    Ok(bigrams)
}

fn count(line: usize, s: &str) -> Result<f64> {
    let count = f64::from_str(s.trim()).map_err(|e| parse_error(line, e))?;
    match count.is_finite() && count >= 0.0 {
        true => Ok(count),
        false => Err(parse_error(line, "count must be a non-negative number")),
    }
}

fn parse_error(line: usize, reason: impl ToString) -> Error {
    Error::Parse {
        line,
        reason: reason.to_string(),
    }
}
