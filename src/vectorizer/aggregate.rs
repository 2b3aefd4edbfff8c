use log::debug;

use crate::error::{DeltaTfIdfError, Result};
use crate::source::LineSource;
use crate::vectorizer::corpus::Corpus;
use crate::vectorizer::document::{ClassLabel, Document};

/// Occurrence aggregation
/// Turns the lines of both classes into `Document`s and fills the `Corpus`
/// with per-class term counts and class totals.
///
/// All class 1 lines must be added before class 2 lines so that documents
/// come out class 1 first, each class in input order.
#[derive(Debug, Default)]
pub struct Aggregator {
    corpus: Corpus,
    documents: Vec<Document>,
    skipped_lines: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            corpus: Corpus::new(),
            documents: Vec::new(),
            skipped_lines: 0,
        }
    }

    /// Read both sources, then aggregate them
    ///
    /// Both sources are read completely before any counting happens, so a
    /// failing source never leaves a half-built corpus behind.
    pub fn from_sources<S1, S2>(class1: &S1, class2: &S2) -> Result<Self>
    where
        S1: LineSource + ?Sized,
        S2: LineSource + ?Sized,
    {
        let class1_lines = read_source(class1)?;
        let class2_lines = read_source(class2)?;

        let mut aggregator = Self::new();
        aggregator.add_lines(ClassLabel::Class1, &class1_lines);
        aggregator.add_lines(ClassLabel::Class2, &class2_lines);
        Ok(aggregator)
    }

    /// Add one line as a document of `class`
    /// Terms are the whitespace separated substrings. An empty line produces
    /// no document; a line of only whitespace produces a document without terms.
    pub fn add_line(&mut self, class: ClassLabel, line: &str) -> &mut Self {
        if line.is_empty() {
            self.skipped_lines += 1;
            return self;
        }
        let mut document = Document::new(class);
        for term in line.split_whitespace() {
            self.corpus.add_occurrence(term, class);
            document.add_term(term);
        }
        self.documents.push(document);
        self
    }

    /// Add multiple lines of the same class
    pub fn add_lines<T>(&mut self, class: ClassLabel, lines: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for line in lines {
            self.add_line(class, line.as_ref());
        }
        self
    }

    /// Number of empty lines that produced no document so far
    #[inline]
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Finish aggregation
    /// The vocabulary order is fixed here; counts never change afterwards.
    pub fn finish(mut self) -> (Corpus, Vec<Document>) {
        self.corpus.sort_vocabulary();
        debug!(
            "aggregated {} documents ({} without terms, {} empty lines skipped), vocabulary {} terms, class totals {}/{}",
            self.documents.len(),
            self.documents.iter().filter(|d| d.is_empty()).count(),
            self.skipped_lines,
            self.corpus.vocab_size(),
            self.corpus.totals.class1,
            self.corpus.totals.class2,
        );
        (self.corpus, self.documents)
    }
}

fn read_source<S>(source: &S) -> Result<Vec<String>>
where
    S: LineSource + ?Sized,
{
    source
        .read_lines()
        .map_err(|e| DeltaTfIdfError::SourceUnavailable {
            source_name: source.describe(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FileSource;

    #[test]
    fn documents_keep_class_order() {
        let mut aggregator = Aggregator::new();
        aggregator
            .add_lines(ClassLabel::Class1, &["good movie", "good film"])
            .add_lines(ClassLabel::Class2, &["bad movie"]);
        let (corpus, documents) = aggregator.finish();

        let classes: Vec<ClassLabel> = documents.iter().map(|d| d.class()).collect();
        assert_eq!(classes, vec![ClassLabel::Class1, ClassLabel::Class1, ClassLabel::Class2]);
        assert_eq!(corpus.totals().class1, 4);
        assert_eq!(corpus.totals().class2, 2);
        let vocab: Vec<&str> = corpus.vocabulary().collect();
        assert_eq!(vocab, vec!["bad", "film", "good", "movie"]);
    }

    #[test]
    fn corpus_counts_match_document_counts() {
        let mut aggregator = Aggregator::new();
        aggregator
            .add_lines(ClassLabel::Class1, &["a a b", "c a"])
            .add_lines(ClassLabel::Class2, &["b b c", "a"]);
        let (corpus, documents) = aggregator.finish();

        for (term, stats) in corpus.iter() {
            let from_docs: u64 = documents.iter().map(|d| d.term_count(term)).sum();
            assert_eq!(stats.occurrences(), from_docs, "term {term}");
        }
        for doc in &documents {
            let sum: u64 = doc.iter().map(|(_, w)| w.occurrences).sum();
            assert_eq!(sum, doc.term_sum());
        }
    }

    #[test]
    fn empty_lines_are_skipped() {
        let mut aggregator = Aggregator::new();
        aggregator.add_lines(ClassLabel::Class1, &["good movie", "", "good film", ""]);
        assert_eq!(aggregator.skipped_lines(), 2);
        let (corpus, documents) = aggregator.finish();

        assert_eq!(documents.len(), 2);
        assert_eq!(corpus.totals().class1, 4);
        assert_eq!(corpus.totals().class2, 0);
    }

    #[test]
    fn whitespace_only_line_is_a_document_without_terms() {
        let mut aggregator = Aggregator::new();
        aggregator
            .add_lines(ClassLabel::Class1, &["good movie", "   ", "\t"])
            .add_lines(ClassLabel::Class2, &["bad movie"]);
        assert_eq!(aggregator.skipped_lines(), 0);
        let (corpus, documents) = aggregator.finish();

        assert_eq!(documents.len(), 4);
        assert!(documents[1].is_empty());
        assert!(documents[2].is_empty());
        assert_eq!(documents[1].class(), ClassLabel::Class1);
        assert_eq!(documents[1].term_sum(), 0);
        assert!(!documents[0].is_empty());
        assert_eq!(corpus.totals().class1, 2);
        assert_eq!(corpus.vocab_size(), 3);
    }

    #[test]
    fn unreadable_source_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FileSource::new(dir.path().join("neg.txt"));
        let class1 = vec!["good movie"];

        let err = Aggregator::from_sources(&class1, &missing).unwrap_err();
        match err {
            DeltaTfIdfError::SourceUnavailable { source_name, .. } => {
                assert!(source_name.ends_with("neg.txt"), "{source_name}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
