use std::fmt;
use std::str::FromStr;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ParseSchemeError;
use crate::vectorizer::corpus::{ClassTotals, Corpus, CorpusTermStats};

/// IDF formulas
///
/// Every formula is `log10(numerator / denominator)` over the class totals
/// `c1`, `c2` and the term's class occurrences `n1`, `n2`.
/// The unsmoothed delta variants yield `+inf` for terms seen only in class 2
/// and `-inf` for terms seen only in class 1; those values are kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdfScheme {
    /// `(c1 + c2) / (n1 + n2)`
    NormalIdf,
    /// `((c1 + c2) - (n1 + n2)) / (n1 + n2)`
    Prob,
    /// `(1 + (c1 + c2) - (0.5 + n1 + n2)) / (0.5 + n1 + n2)`
    Bm25,
    /// `(c1 * n2) / (c2 * n1)`
    Delta,
    /// `(c1 * n2 + 0.5) / (c2 * n1 + 0.5)`
    #[default]
    DeltaSmoothed,
    /// `((c1 - n1) * n2) / ((c2 - n2) * n1)`
    DeltaProb,
    /// `((c1 - n1) * n2 + 0.5) / ((c2 - n2) * n1 + 0.5)`
    DeltaProbSmoothed,
}

impl IdfScheme {
    pub const ALL: [IdfScheme; 7] = [
        IdfScheme::NormalIdf,
        IdfScheme::Prob,
        IdfScheme::Bm25,
        IdfScheme::Delta,
        IdfScheme::DeltaSmoothed,
        IdfScheme::DeltaProb,
        IdfScheme::DeltaProbSmoothed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IdfScheme::NormalIdf => "normal_idf",
            IdfScheme::Prob => "prob",
            IdfScheme::Bm25 => "bm25",
            IdfScheme::Delta => "delta",
            IdfScheme::DeltaSmoothed => "delta_smoothed",
            IdfScheme::DeltaProb => "delta_prob",
            IdfScheme::DeltaProbSmoothed => "delta_prob_smoothed",
        }
    }

    /// Whether the formula can divide by zero
    pub fn is_unsmoothed_delta(self) -> bool {
        matches!(self, IdfScheme::Delta | IdfScheme::DeltaProb)
    }

    /// `(numerator, denominator)` of the formula for one term
    pub fn ratio(self, totals: &ClassTotals, stats: &CorpusTermStats) -> (f64, f64) {
        let c1 = totals.class1 as f64;
        let c2 = totals.class2 as f64;
        let n1 = stats.class1_occurrences as f64;
        let n2 = stats.class2_occurrences as f64;

        match self {
            IdfScheme::NormalIdf => (c1 + c2, n1 + n2),
            IdfScheme::Prob => ((c1 + c2) - (n1 + n2), n1 + n2),
            IdfScheme::Bm25 => {
                let denominator = 0.5 + n1 + n2;
                (1.0 + (c1 + c2) - denominator, denominator)
            }
            IdfScheme::Delta => (c1 * n2, c2 * n1),
            IdfScheme::DeltaSmoothed => (c1 * n2 + 0.5, c2 * n1 + 0.5),
            IdfScheme::DeltaProb => ((c1 - n1) * n2, (c2 - n2) * n1),
            IdfScheme::DeltaProbSmoothed => ((c1 - n1) * n2 + 0.5, (c2 - n2) * n1 + 0.5),
        }
    }

    /// IDF of one term
    #[inline]
    pub fn idf(self, totals: &ClassTotals, stats: &CorpusTermStats) -> f64 {
        let (numerator, denominator) = self.ratio(totals, stats);
        (numerator / denominator).log10()
    }
}

impl fmt::Display for IdfScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdfScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdfScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| ParseSchemeError {
                kind: "idf",
                name: s.to_string(),
                expected: "normal_idf, prob, bm25, delta, delta_smoothed, delta_prob, delta_prob_smoothed",
            })
    }
}

/// IDF phase
/// Stores an IDF for every term of the corpus. Terms are independent, so
/// they are computed in parallel and written back in vocabulary order.
pub fn compute_idf(corpus: &mut Corpus, scheme: IdfScheme) {
    let totals = corpus.totals;
    let idfs: Vec<f64> = corpus
        .term_stats
        .par_values()
        .map(|stats| scheme.idf(&totals, stats))
        .collect();

    for (stats, idf) in corpus.term_stats.values_mut().zip(idfs) {
        stats.idf = Some(idf);
    }
    debug!("computed {} idf values with `{}`", corpus.vocab_size(), scheme);
}
