use crate::{LanguageModel, Segmenter};

/// Run a segmenter against the built-in test cases
pub fn run<M: LanguageModel>(segmenter: &Segmenter<M>) {
    assert!(segmenter.segment("").is_empty());

    let mut success = true;
    for test in TEST_CASES.iter().copied() {
        success &= check_segments(test, segmenter);
    }

    assert!(success);
}

pub fn assert_segments<M: LanguageModel>(s: &[&str], segmenter: &Segmenter<M>) {
    let words = segmenter.segment(&s.join(""));
    let cmp = words.iter().map(|w| w.as_str()).collect::<Vec<_>>();
    assert_eq!(cmp, s);
}

pub fn check_segments<M: LanguageModel>(s: &[&str], segmenter: &Segmenter<M>) -> bool {
    let words = segmenter.segment(&s.join(""));
    let cmp = words.iter().map(|w| w.as_str()).collect::<Vec<_>>();
    let success = cmp == s;
    if !success {
        println!("expected: {:?}", s);
        println!("actual:   {:?}\n", cmp);
    }
    success
}

/// Built-in test cases
///
/// These are exposed so that you can test with different data sources.
pub const TEST_CASES: &[&[&str]] = &[
    &["choose", "spain"],
    &["this", "is", "a", "test"],
    &["what", "is", "the", "weather", "like", "today"],
    &["friends", "toss", "frisbees"],
    &["crisp", "air", "of"],
    &["the", "crisp", "air", "of"],
    &["theres", "a", "chill"],
];
