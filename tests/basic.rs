use std::sync::Arc;

use once_cell::sync::Lazy;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use smartstring::alias::String as SmartString;

use lattice_segment::clean::clean;
use lattice_segment::{Corpus, Error, HashMap, LanguageModel, Segmenter};

macro_rules! assert_segments {
    ($segmenter:expr, $text:expr, $list:expr) => {
        let words = $segmenter.segment($text);
        assert_eq!(words.iter().map(|w| w.as_str()).collect::<Vec<_>>(), $list);
    };
}

#[test]
fn crisp_air() {
    assert_segments!(SEGMENTER, "thecrispairof", &["the", "crisp", "air", "of"]);
    assert_segments!(SEGMENTER, "ofthe", &["of", "the"]);
}

#[test]
fn corpus_word_length() {
    // Without an override, words are no longer than the longest known word ("crisp")
    let segmenter = Segmenter::new(&*CORPUS).unwrap();
    assert_eq!(segmenter.max_word_length(), 5);
    assert_segments!(segmenter, "thecrispairof", &["the", "crisp", "air", "of"]);

    let words = segmenter.segment("thecrispairofzzzzzzzz");
    assert!(words.iter().all(|w| w.len() <= 5));
    assert_eq!(words.concat(), "thecrispairofzzzzzzzz");
}

#[test]
fn empty_input() {
    assert!(SEGMENTER.segment("").is_empty());
    assert!(SEGMENTER.segment(" -- ?! ").is_empty());
}

#[test]
fn reconstruction() {
    let texts = [
        "thecrispairof",
        "The crisp air of a fall morning",
        "Crème brûlée, s'il vous plaît",
        "zzqxjkvw",
        "ofofoftheairair",
        "route66",
    ];

    let mut segmenter = Segmenter::new(&*CORPUS).unwrap();
    for limit in 1..=8 {
        segmenter.set_max_word_length(limit).unwrap();
        for text in texts.iter() {
            let words = segmenter.segment(text);
            assert!(!words.is_empty());
            assert_eq!(words.concat(), clean(text));
        }
    }
}

#[test]
fn max_word_length() {
    let mut segmenter = Segmenter::new(&*CORPUS).unwrap();
    for limit in 1..=6 {
        segmenter.set_max_word_length(limit).unwrap();
        let words = segmenter.segment("thecrispairof");
        assert!(words.iter().all(|w| w.chars().count() <= limit));
        assert_eq!(words.concat(), "thecrispairof");
    }

    segmenter.set_max_word_length(2).unwrap();
    assert_segments!(segmenter, "ofof", &["of", "of"]);
}

#[test]
fn unknown_text() {
    let corpus = Corpus::from_iters(vec![], vec![]);
    let segmenter = Segmenter::with_max_word_length(corpus, 3).unwrap();

    let words = segmenter.segment("qwxzvbnmlkjh");
    assert!(!words.is_empty());
    assert!(words.iter().all(|w| w.len() <= 3));
    assert_eq!(words.concat(), "qwxzvbnmlkjh");
}

#[test]
fn bigram_preference() {
    let unigrams: Vec<(SmartString, f64)> = vec![
        ("choose".into(), 80_000.0),
        ("chooses".into(), 8_000.0),
        ("spain".into(), 2_000.0),
        ("pain".into(), 90_000.0),
    ];

    // Without bigrams, the unigram probabilities favor "pain"
    let corpus = Corpus::from_iters(unigrams.clone(), vec![]);
    let segmenter = Segmenter::new(corpus).unwrap();
    assert_segments!(segmenter, "choosespain", &["chooses", "pain"]);

    let corpus = Corpus::from_iters(unigrams, vec![(("choose".into(), "spain".into()), 7.0)]);
    let segmenter = Segmenter::new(corpus).unwrap();
    assert_segments!(segmenter, "choosespain", &["choose", "spain"]);

    let found = segmenter.segment_scored("choosespain").unwrap();
    let bigram = (7.0f64 / 80_000.0).log10() + lattice_segment::BIGRAM_BONUS;
    let expected = segmenter.score("choose", None) + bigram;
    assert!((found.score() - expected).abs() < 1e-9);
}

#[test]
fn recleaning() {
    let expected = SEGMENTER.segment("thecrispairof");
    assert_eq!(SEGMENTER.segment("The Crisp-Air, OF!"), expected);
    assert_eq!(SEGMENTER.segment("thé crìsp àir öf"), expected);
}

#[test]
fn configuration() {
    let corpus = (*CORPUS).clone();
    assert!(matches!(
        Segmenter::with_max_word_length(corpus, 0),
        Err(Error::InvalidMaxWordLength)
    ));

    let mut segmenter = Segmenter::with_max_word_length(&*CORPUS, 5).unwrap();
    assert!(segmenter.set_max_word_length(0).is_err());
    assert_eq!(segmenter.max_word_length(), 5);
}

#[test]
fn concurrent() {
    let texts = vec![
        "thecrispairof",
        "theairofthecrisp",
        "ofthecrispair",
        "crispcrispcrisp",
        "theqqqair",
    ];

    let sequential = texts
        .iter()
        .map(|text| SEGMENTER.segment(text))
        .collect::<Vec<_>>();
    let parallel = texts
        .par_iter()
        .map(|text| SEGMENTER.segment(text))
        .collect::<Vec<_>>();
    assert_eq!(sequential, parallel);

    let corpus = Arc::new((*CORPUS).clone());
    let shared = Arc::new(Segmenter::with_max_word_length(corpus, 5).unwrap());
    let handles = (0..4)
        .map(|_| {
            let segmenter = shared.clone();
            std::thread::spawn(move || segmenter.segment("thecrispairof"))
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), sequential[0]);
    }
}

#[test]
fn custom_model() {
    let segmenter = Segmenter::new(Syllables::default()).unwrap();
    assert_eq!(segmenter.max_word_length(), 3);
    assert_segments!(segmenter, "ПРИВЕТ!", &["при", "вет"]);

    let boxed: Box<dyn LanguageModel> = Box::new(Syllables::default());
    let segmenter = Segmenter::new(boxed).unwrap();
    assert_segments!(segmenter, "при-вет", &["при", "вет"]);
}

/// Model that keeps non-ASCII letters and only knows two syllables
struct Syllables {
    unigrams: HashMap<String, f64>,
}

impl Default for Syllables {
    fn default() -> Self {
        let mut unigrams = HashMap::default();
        unigrams.insert("при".to_owned(), 10.0);
        unigrams.insert("вет".to_owned(), 10.0);
        Self { unigrams }
    }
}

impl LanguageModel for Syllables {
    fn unigram(&self, word: &str) -> f64 {
        self.unigrams.get(word).copied().unwrap_or(0.0)
    }

    fn bigram(&self, _: &str, _: &str) -> f64 {
        0.0
    }

    fn total(&self) -> f64 {
        100.0
    }

    fn clean(&self, text: &str) -> String {
        text.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect()
    }

    fn max_word_length(&self) -> usize {
        3
    }
}

static CORPUS: Lazy<Corpus> = Lazy::new(|| {
    let mut corpus = Corpus::from_iters(
        vec![
            ("the".into(), 100.0),
            ("crisp".into(), 5.0),
            ("air".into(), 50.0),
            ("of".into(), 200.0),
        ],
        vec![],
    );
    corpus.set_total(1000.0).unwrap();
    corpus
});

static SEGMENTER: Lazy<Segmenter<Corpus>> =
    Lazy::new(|| Segmenter::with_max_word_length((*CORPUS).clone(), 5).unwrap());
