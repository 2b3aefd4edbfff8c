use std::fmt;
use std::str::FromStr;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{DeltaTfIdfError, ParseSchemeError, Result};
use crate::vectorizer::corpus::{Corpus, MAX_TF_FLOOR};
use crate::vectorizer::document::Document;

/// TF formulas
///
/// All of them start from the natural TF `raw_count / document_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TfScheme {
    /// `tf`
    #[default]
    Natural,
    /// `1 + log10(tf)`, negative for rare terms
    Logarithm,
    /// `0.5 + 0.5 * tf / max_tf(term)` with the max taken over the whole corpus
    Augmented,
    /// `1` when `tf > 0`, else `0`
    Boolean,
}

impl TfScheme {
    pub const ALL: [TfScheme; 4] = [
        TfScheme::Natural,
        TfScheme::Logarithm,
        TfScheme::Augmented,
        TfScheme::Boolean,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TfScheme::Natural => "natural",
            TfScheme::Logarithm => "logarithm",
            TfScheme::Augmented => "augmented",
            TfScheme::Boolean => "boolean",
        }
    }

    /// Whether the scheme needs the corpus-wide max TF
    #[inline]
    pub fn is_two_pass(self) -> bool {
        matches!(self, TfScheme::Augmented)
    }

    /// TF of a single-pass scheme from the natural TF
    ///
    /// For `Augmented` this returns the natural TF unchanged; normalization
    /// happens in the second pass.
    #[inline]
    pub fn tf(self, natural_tf: f64) -> f64 {
        match self {
            TfScheme::Natural | TfScheme::Augmented => natural_tf,
            TfScheme::Logarithm => 1.0 + natural_tf.log10(),
            TfScheme::Boolean => {
                if natural_tf > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Normalize a natural TF against the term's corpus-wide max
#[inline]
pub fn augment(natural_tf: f64, max_tf: f64) -> f64 {
    0.5 + (0.5 * natural_tf) / max_tf
}

impl fmt::Display for TfScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TfScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TfScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| ParseSchemeError {
                kind: "tf",
                name: s.to_string(),
                expected: "natural, logarithm, augmented, boolean",
            })
    }
}

/// Frozen per-term max TF, indexed by vocabulary column
///
/// Built once every document finished its first pass; the second pass only
/// reads from it.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxTfSnapshot {
    max_tf: Vec<f64>,
}

impl MaxTfSnapshot {
    /// Max natural TF per term over `documents`
    pub fn build(corpus: &Corpus, documents: &[Document]) -> Result<Self> {
        let vocab_size = corpus.vocab_size();
        let max_tf = documents
            .par_iter()
            .try_fold(
                || vec![MAX_TF_FLOOR; vocab_size],
                |mut acc, doc| {
                    let total = doc.term_sum();
                    for (term, weight) in doc.iter() {
                        let idx = column_of(corpus, term)?;
                        acc[idx] = acc[idx].max(weight.natural_tf(total));
                    }
                    Ok::<_, DeltaTfIdfError>(acc)
                },
            )
            .try_reduce(
                || vec![MAX_TF_FLOOR; vocab_size],
                |mut a, b| {
                    a.iter_mut().zip(b).for_each(|(x, y)| *x = x.max(y));
                    Ok(a)
                },
            )?;
        Ok(Self { max_tf })
    }

    #[inline]
    fn get(&self, column: usize) -> Option<f64> {
        self.max_tf.get(column).copied()
    }

    /// Store the maxima into the corpus term statistics
    fn write_back(&self, corpus: &mut Corpus) {
        for (stats, max_tf) in corpus.term_stats.values_mut().zip(&self.max_tf) {
            stats.max_tf = *max_tf;
        }
    }
}

fn column_of(corpus: &Corpus, term: &str) -> Result<usize> {
    corpus
        .term_index(term)
        .ok_or_else(|| DeltaTfIdfError::InternalConsistency { term: term.to_string() })
}

/// TF phase
/// Writes the TF of every (document, term) pair.
/// Single-pass schemes are document local. `Augmented` first gathers the
/// max TF of every term over all documents, then normalizes.
pub fn compute_tf(corpus: &mut Corpus, documents: &mut [Document], scheme: TfScheme) -> Result<()> {
    if !scheme.is_two_pass() {
        documents.par_iter_mut().for_each(|doc| {
            let total = doc.term_sum();
            for (_, weight) in doc.iter_mut() {
                weight.tf = scheme.tf(weight.natural_tf(total));
            }
        });
        debug!("computed tf for {} documents with `{}`", documents.len(), scheme);
        return Ok(());
    }

    let snapshot = MaxTfSnapshot::build(corpus, documents)?;
    snapshot.write_back(corpus);

    let corpus: &Corpus = corpus;
    documents.par_iter_mut().try_for_each(|doc| {
        let total = doc.term_sum();
        for (term, weight) in doc.iter_mut() {
            let max_tf = snapshot
                .get(column_of(corpus, term)?)
                .ok_or_else(|| DeltaTfIdfError::InternalConsistency { term: term.to_string() })?;
            weight.tf = augment(weight.natural_tf(total), max_tf);
        }
        Ok::<(), DeltaTfIdfError>(())
    })?;
    debug!("computed augmented tf for {} documents", documents.len());
    Ok(())
}
