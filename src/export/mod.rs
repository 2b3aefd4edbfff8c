pub mod arff;
pub mod snapshot;

use num::{Float, NumCast};
use rayon::prelude::*;

use crate::vectorizer::document::ClassLabel;
use crate::DeltaTfIdfVectorizer;

/// One document as a dense vector over the whole vocabulary
///
/// `N` is the output precision (e.g. `f32`, `f64`). Terms absent from the
/// document are zero; infinite and NaN weights are carried over as they are.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseRow<N>
where
    N: Float,
{
    pub class: ClassLabel,
    pub values: Vec<N>,
}

impl<N> DenseRow<N>
where
    N: Float,
{
    /// Number of non-zero columns
    pub fn nnz(&self) -> usize {
        self.values.iter().filter(|v| !v.is_zero()).count()
    }
}

/// Dense rows of every document, in document order, columns in vocabulary order
pub fn dense_rows<N>(vectorizer: &DeltaTfIdfVectorizer) -> Vec<DenseRow<N>>
where
    N: Float + Send,
{
    let corpus = vectorizer.corpus();
    let dim = vectorizer.vocab_size();
    vectorizer
        .documents()
        .par_iter()
        .map(|doc| {
            let mut values = vec![N::zero(); dim];
            for (term, weight) in doc.weights() {
                if let Some(idx) = corpus.term_index(term) {
                    values[idx] = <N as NumCast>::from(weight).unwrap_or_else(N::nan);
                }
            }
            DenseRow {
                class: doc.class(),
                values,
            }
        })
        .collect()
}
