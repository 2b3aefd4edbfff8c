pub mod aggregate;
pub mod corpus;
pub mod document;
pub mod idf;
pub mod tf;
pub mod weight;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::WeightingConfig;
use crate::error::Result;
use crate::source::LineSource;
use crate::vectorizer::aggregate::Aggregator;
use crate::vectorizer::corpus::{ClassTotals, Corpus, MAX_TF_FLOOR};
use crate::vectorizer::document::{ClassLabel, Document};
use crate::vectorizer::weight::WeightReport;

/// Delta TF-IDF Vectorizer
///
/// Owns the corpus context and the documents of one run and drives the
/// phases in order: aggregation, IDF, TF, combination.
/// Each phase only starts once the previous one finished for the whole
/// corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaTfIdfVectorizer {
    config: WeightingConfig,
    corpus: Corpus,
    documents: Vec<Document>,
    report: WeightReport,
}

impl DeltaTfIdfVectorizer {
    /// Weight two in-memory line collections
    pub fn new<A, B>(class1: &[A], class2: &[B], config: WeightingConfig) -> Result<Self>
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut aggregator = Aggregator::new();
        aggregator
            .add_lines(ClassLabel::Class1, class1)
            .add_lines(ClassLabel::Class2, class2);
        Self::from_aggregator(aggregator, config)
    }

    /// Read both sources and weight them
    /// Fails with `SourceUnavailable` before anything is computed when either
    /// source cannot be read.
    pub fn from_sources<S1, S2>(class1: &S1, class2: &S2, config: WeightingConfig) -> Result<Self>
    where
        S1: LineSource + ?Sized,
        S2: LineSource + ?Sized,
    {
        let aggregator = Aggregator::from_sources(class1, class2)?;
        Self::from_aggregator(aggregator, config)
    }

    /// Weight an already filled aggregator
    pub fn from_aggregator(aggregator: Aggregator, config: WeightingConfig) -> Result<Self> {
        let (corpus, documents) = aggregator.finish();
        let mut instance = Self {
            config,
            corpus,
            documents,
            report: WeightReport::default(),
        };
        instance.run_phases()?;
        Ok(instance)
    }

    /// Recompute every TF, IDF and weight with another configuration
    /// Occurrence counts are reused as they are.
    pub fn reweight(&mut self, config: WeightingConfig) -> Result<()> {
        self.config = config;
        for stats in self.corpus.term_stats.values_mut() {
            stats.idf = None;
            stats.max_tf = MAX_TF_FLOOR;
        }
        self.run_phases()
    }

    fn run_phases(&mut self) -> Result<()> {
        idf::compute_idf(&mut self.corpus, self.config.idf_scheme);
        tf::compute_tf(&mut self.corpus, &mut self.documents, self.config.tf_scheme)?;
        self.report = weight::combine(&self.corpus, &mut self.documents)?;
        info!(
            "weighted {} documents over {} terms with tf `{}` / idf `{}`: {}",
            self.documents.len(),
            self.corpus.vocab_size(),
            self.config.tf_scheme,
            self.config.idf_scheme,
            self.report
        );
        Ok(())
    }
}

/// Reading results
impl DeltaTfIdfVectorizer {
    #[inline]
    pub fn config(&self) -> WeightingConfig {
        self.config
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[inline]
    pub fn totals(&self) -> ClassTotals {
        self.corpus.totals()
    }

    /// Distinct terms in lexicographic order, the column order of dense vectors
    #[inline]
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.corpus.vocabulary()
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.corpus.vocab_size()
    }

    /// Documents, class 1 first, each class in input order
    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[inline]
    pub fn document(&self, idx: usize) -> Option<&Document> {
        self.documents.get(idx)
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.corpus.idf(term)
    }

    /// Outcome counts of the last run
    #[inline]
    pub fn report(&self) -> WeightReport {
        self.report
    }
}
