use std::fmt;

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{DeltaTfIdfError, Result};
use crate::vectorizer::corpus::Corpus;
use crate::vectorizer::document::Document;

/// What kind of number a weight turned out to be
///
/// Infinite, negative and NaN weights are legitimate results of some
/// schemes. They are reported, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightOutcome {
    Finite,
    Negative,
    Infinite,
    NotANumber,
}

impl WeightOutcome {
    pub fn of(weight: f64) -> Self {
        if weight.is_nan() {
            WeightOutcome::NotANumber
        } else if weight.is_infinite() {
            WeightOutcome::Infinite
        } else if weight < 0.0 {
            WeightOutcome::Negative
        } else {
            WeightOutcome::Finite
        }
    }
}

/// Outcome counts over all (document, term) weights of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeightReport {
    pub finite: usize,
    pub negative: usize,
    pub infinite: usize,
    pub not_a_number: usize,
}

impl WeightReport {
    fn record(&mut self, outcome: WeightOutcome) {
        match outcome {
            WeightOutcome::Finite => self.finite += 1,
            WeightOutcome::Negative => self.negative += 1,
            WeightOutcome::Infinite => self.infinite += 1,
            WeightOutcome::NotANumber => self.not_a_number += 1,
        }
    }

    fn merge(mut self, other: WeightReport) -> Self {
        self.finite += other.finite;
        self.negative += other.negative;
        self.infinite += other.infinite;
        self.not_a_number += other.not_a_number;
        self
    }

    pub fn total(&self) -> usize {
        self.finite + self.negative + self.infinite + self.not_a_number
    }

    /// Count the outcomes of already combined weights
    pub fn from_documents(documents: &[Document]) -> Self {
        documents
            .par_iter()
            .map(|doc| {
                let mut report = WeightReport::default();
                doc.weights().for_each(|(_, w)| report.record(WeightOutcome::of(w)));
                report
            })
            .reduce(WeightReport::default, WeightReport::merge)
    }
}

impl fmt::Display for WeightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} weights: {} finite, {} negative, {} infinite, {} NaN",
            self.total(),
            self.finite,
            self.negative,
            self.infinite,
            self.not_a_number
        )
    }
}

/// Combine phase
/// `tf_idf = tf * idf` for every (document, term).
/// A term without an IDF means the IDF phase did not run over this corpus,
/// which aborts the run.
pub fn combine(corpus: &Corpus, documents: &mut [Document]) -> Result<WeightReport> {
    let report = documents
        .par_iter_mut()
        .map(|doc| {
            let mut report = WeightReport::default();
            for (term, weight) in doc.iter_mut() {
                let idf = corpus
                    .idf(term)
                    .ok_or_else(|| DeltaTfIdfError::InternalConsistency { term: term.to_string() })?;
                weight.tf_idf = weight.tf * idf;
                report.record(WeightOutcome::of(weight.tf_idf));
            }
            Ok::<_, DeltaTfIdfError>(report)
        })
        .try_reduce(WeightReport::default, |a, b| Ok(a.merge(b)))?;

    debug!("combined {report}");
    if report.infinite > 0 || report.not_a_number > 0 {
        warn!(
            "{} infinite and {} NaN weights produced; consider a smoothed idf scheme",
            report.infinite, report.not_a_number
        );
    }
    Ok(report)
}
