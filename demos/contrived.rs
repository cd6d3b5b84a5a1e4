use lattice_segment::{Corpus, HashMap, Segmenter};

fn main() {
    let mut unigrams = HashMap::default();

    unigrams.insert("choose".into(), 80_000.0);
    unigrams.insert("chooses".into(), 8_000.0);

    unigrams.insert("spain".into(), 2_000.0);
    unigrams.insert("pain".into(), 90_000.0);

    let mut bigrams = HashMap::default();

    bigrams.insert(("choose".into(), "spain".into()), 7.0);

    let segmenter = Segmenter::new(Corpus::from_maps(unigrams, bigrams)).unwrap();
    let found = segmenter.segment_scored("Choose Spain!").unwrap();

    println!("{:?} ({})", found.iter().collect::<Vec<&str>>(), found.score());
}
