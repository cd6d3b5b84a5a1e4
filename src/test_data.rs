//! Small fixture corpus for tests and benchmarks

use crate::{Corpus, Segmenter};

#[test]
fn test_data() {
    crate::test_cases::run(&segmenter());
}

pub fn segmenter() -> Segmenter<Corpus> {
    // The fixture total is valid and non-zero, so construction can't fail
    Segmenter::new(corpus()).unwrap()
}

pub fn corpus() -> Corpus {
    let mut corpus = Corpus::from_readers(UNIGRAMS.as_bytes(), BIGRAMS.as_bytes()).unwrap();
    corpus.set_total(TOTAL).unwrap();
    corpus
}

const TOTAL: f64 = 1_000_000.0;

const UNIGRAMS: &str = "the\t60000
a\t50000
of\t40000
to\t25000
is\t20000
at\t15000
he\t12000
this\t9000
her\t9000
there\t8000
like\t6000
what\t5000
we\t5000
day\t3000
today\t2000
friends\t1500
pain\t1500
air\t1200
pair\t1000
choose\t900
weather\t800
spain\t700
test\t700
theres\t300
chill\t200
crisp\t150
chooses\t100
toss\t100
frisbees\t20
";

const BIGRAMS: &str = "choose spain\t30
";
