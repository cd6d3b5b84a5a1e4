use std::iter;
use std::ops::{Index, Range};

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use smartstring::alias::String;

use crate::model::LanguageModel;
use crate::{Segmentation, BIGRAM_BONUS, SENTENCE_START};

/// Log-likelihood of `word` in the context of the `previous` word
pub(crate) fn score<M>(model: &M, word: &str, previous: Option<&str>) -> f64
where
    M: LanguageModel + ?Sized,
{
    if let Some(prev) = previous.filter(|prev| !prev.is_empty()) {
        let uni = model.unigram(prev);
        let bi = model.bigram(prev, word);
        if uni > 0.0 && bi > 0.0 {
            // Conditional probability of the word given the previous word, plus a fixed bonus.
            // The technical name is "stupid backoff" and it's not a probability distribution
            // but it works well in practice.
            return (bi / uni).log10() + BIGRAM_BONUS;
        }
    }

    let total = model.total();
    match model.unigram(word) {
        // Probability of the given word
        uni if uni > 0.0 => (uni / total).log10(),
        // Penalize words not found in the unigrams according to their length, a crucial
        // heuristic. Same as `log10(10 / (total * 10^len))`, which overflows for long words.
        _ => 1.0 - total.log10() - word.chars().count() as f64,
    }
}

/// Find the most likely segmentation of `text`, with no word longer than `limit` characters
///
/// Returns `None` if no cell in the last row is reachable. Callers are expected to handle
/// empty input before getting here.
pub(crate) fn run<M>(model: &M, text: &Text<'_>, limit: usize) -> Option<Segmentation>
where
    M: LanguageModel + ?Sized,
{
    let table = Table::fill(model, text, limit);
    let (score, end) = table.best_end()?;
    let words = table.backtrack(text, end)?;
    Some(Segmentation { words, score })
}

/// Band of the dynamic programming table
///
/// `rows[i]` holds the cells `dp[i][j]` for the last word `text[j..i]`, for `j` within `limit`
/// characters of `i`. Row 0 holds only the empty prefix.
struct Table {
    rows: Vec<Row>,
}

impl Table {
    fn fill<M>(model: &M, text: &Text<'_>, limit: usize) -> Self
    where
        M: LanguageModel + ?Sized,
    {
        let mut rows = Vec::with_capacity(text.len() + 1);
        rows.push(Row {
            start: 0,
            cells: vec![Cell {
                score: 0.0,
                back: None,
            }],
        });

        for end in 1..=text.len() {
            let start = end.saturating_sub(limit);
            let filled = &rows;
            // Cells in a row only read earlier rows, collecting is the barrier between rows
            let cells = (start..end)
                .into_par_iter()
                .map(|split| best_cell(model, text, filled, split, end, limit))
                .collect::<Vec<_>>();
            rows.push(Row { start, cells });
        }

        Self { rows }
    }

    /// Score and start of the most likely last word
    fn best_end(&self) -> Option<(f64, usize)> {
        let last = self.rows.last()?;
        let mut best = None;
        for (offset, cell) in last.cells.iter().enumerate() {
            if !cell.reachable() {
                continue;
            }

            match best {
                Some((score, _)) if score >= cell.score => {}
                _ => best = Some((cell.score, last.start + offset)),
            }
        }
        best
    }

    /// Walk the back-pointers from the last word to the first
    fn backtrack(&self, text: &Text<'_>, split: usize) -> Option<Vec<String>> {
        let (mut end, mut split) = (text.len(), split);
        let mut words = Vec::new();
        loop {
            if split == 0 {
                words.push(text[0..end].into());
                break;
            }

            words.push(text[split..end].into());
            let prior = self.rows[end].get(split).back?;
            end = split;
            split = prior;
        }

        words.reverse();
        Some(words)
    }
}

/// Best way to reach `dp[end][split]`, trying every earlier word `text[prior..split]`
fn best_cell<M>(
    model: &M,
    text: &Text<'_>,
    rows: &[Row],
    split: usize,
    end: usize,
    limit: usize,
) -> Cell
where
    M: LanguageModel + ?Sized,
{
    let word = &text[split..end];
    let row = &rows[split];

    let mut best = Cell::UNREACHABLE;
    for prior in split.saturating_sub(limit)..=split {
        let cell = row.get(prior);
        if !cell.reachable() {
            continue;
        }

        let previous = match split {
            0 => SENTENCE_START,
            _ => &text[prior..split],
        };

        let score = cell.score + score(model, word, Some(previous));
        if score > best.score {
            best = Cell {
                score,
                back: Some(prior),
            };
        }
    }

    best
}

struct Row {
    start: usize,
    cells: Vec<Cell>,
}

impl Row {
    fn get(&self, split: usize) -> Cell {
        split
            .checked_sub(self.start)
            .and_then(|offset| self.cells.get(offset))
            .copied()
            .unwrap_or(Cell::UNREACHABLE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    score: f64,
    back: Option<usize>,
}

impl Cell {
    const UNREACHABLE: Self = Self {
        score: f64::NEG_INFINITY,
        back: None,
    };

    fn reachable(&self) -> bool {
        self.score > f64::NEG_INFINITY
    }
}

/// Cleaned input, indexed by character position
#[derive(Debug)]
pub(crate) struct Text<'a> {
    inner: &'a str,
    bounds: Vec<usize>,
}

impl<'a> Text<'a> {
    pub(crate) fn new(inner: &'a str) -> Self {
        let bounds = inner
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(inner.len()))
            .collect();
        Self { inner, bounds }
    }

    /// Length in characters
    pub(crate) fn len(&self) -> usize {
        self.bounds.len() - 1
    }
}

impl<'a> Index<Range<usize>> for Text<'a> {
    type Output = str;

    fn index(&self, index: Range<usize>) -> &Self::Output {
        &self.inner[self.bounds[index.start]..self.bounds[index.end]]
    }
}
