use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::document::ClassLabel;

/// Starting value of a term's max TF; any real TF is larger.
pub const MAX_TF_FLOOR: f64 = f64::MIN_POSITIVE;

/// Corpus-wide statistics of one term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorpusTermStats {
    /// occurrences in class 1 documents
    pub class1_occurrences: u64,
    /// occurrences in class 2 documents
    pub class2_occurrences: u64,
    /// `None` until the IDF phase ran
    pub idf: Option<f64>,
    /// largest natural TF of this term over all documents, augmented TF only
    pub max_tf: f64,
}

impl CorpusTermStats {
    pub fn new() -> Self {
        Self {
            class1_occurrences: 0,
            class2_occurrences: 0,
            idf: None,
            max_tf: MAX_TF_FLOOR,
        }
    }

    #[inline]
    pub fn occurrences(&self) -> u64 {
        self.class1_occurrences + self.class2_occurrences
    }

    #[inline]
    fn record(&mut self, class: ClassLabel) {
        match class {
            ClassLabel::Class1 => self.class1_occurrences += 1,
            ClassLabel::Class2 => self.class2_occurrences += 1,
        }
    }
}

impl Default for CorpusTermStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Total token count of each class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassTotals {
    pub class1: u64,
    pub class2: u64,
}

impl ClassTotals {
    #[inline]
    pub fn total(&self) -> u64 {
        self.class1 + self.class2
    }
}

/// keep per-term class counts and class totals for one run
///
/// The corpus is the explicit context every phase reads from; there is no
/// shared global state, so independent runs never interfere.
/// Once aggregation finished, terms are kept in lexicographic order and the
/// position of a term is its column in a dense vector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(with = "indexmap::map::serde_seq")]
    pub(crate) term_stats: IndexMap<Box<str>, CorpusTermStats>,
    pub(crate) totals: ClassTotals,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            term_stats: IndexMap::new(),
            totals: ClassTotals::default(),
        }
    }

    /// Count one occurrence of `term` in a document of `class`
    pub(crate) fn add_occurrence(&mut self, term: &str, class: ClassLabel) {
        match self.term_stats.get_mut(term) {
            Some(stats) => stats.record(class),
            None => {
                let mut stats = CorpusTermStats::new();
                stats.record(class);
                self.term_stats.insert(term.into(), stats);
            }
        }
        match class {
            ClassLabel::Class1 => self.totals.class1 += 1,
            ClassLabel::Class2 => self.totals.class2 += 1,
        }
    }

    /// Fix the vocabulary order once counting is done
    pub(crate) fn sort_vocabulary(&mut self) {
        self.term_stats.sort_keys();
    }

    #[inline]
    pub fn totals(&self) -> ClassTotals {
        self.totals
    }

    /// Get the statistics of a term
    #[inline]
    pub fn term_stats(&self, term: &str) -> Option<&CorpusTermStats> {
        self.term_stats.get(term)
    }

    #[inline]
    pub(crate) fn term_stats_mut(&mut self, term: &str) -> Option<&mut CorpusTermStats> {
        self.term_stats.get_mut(term)
    }

    /// Iterate terms and their statistics in vocabulary order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CorpusTermStats)> {
        self.term_stats.iter().map(|(t, s)| (&**t, s))
    }

    /// Terms in vocabulary order
    #[inline]
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.term_stats.keys().map(|t| &**t)
    }

    /// Column of `term` in vocabulary order
    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.term_stats.get_index_of(term)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_stats.len()
    }

    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_stats.get(term).and_then(|s| s.idf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrences_accumulate_per_class() {
        let mut corpus = Corpus::new();
        corpus.add_occurrence("movie", ClassLabel::Class1);
        corpus.add_occurrence("movie", ClassLabel::Class2);
        corpus.add_occurrence("movie", ClassLabel::Class1);
        corpus.add_occurrence("bad", ClassLabel::Class2);

        let movie = corpus.term_stats("movie").unwrap();
        assert_eq!(movie.class1_occurrences, 2);
        assert_eq!(movie.class2_occurrences, 1);
        assert_eq!(movie.occurrences(), 3);
        assert_eq!(movie.idf, None);
        assert_eq!(movie.max_tf, MAX_TF_FLOOR);
        assert_eq!(corpus.totals(), ClassTotals { class1: 2, class2: 2 });
    }

    #[test]
    fn sorted_vocabulary_gives_stable_columns() {
        let mut corpus = Corpus::new();
        for term in ["pear", "apple", "zoo", "banana"] {
            corpus.add_occurrence(term, ClassLabel::Class1);
        }
        corpus.sort_vocabulary();

        let vocab: Vec<&str> = corpus.vocabulary().collect();
        assert_eq!(vocab, vec!["apple", "banana", "pear", "zoo"]);
        assert_eq!(corpus.term_index("pear"), Some(2));
        assert_eq!(corpus.term_index("missing"), None);
    }
}
