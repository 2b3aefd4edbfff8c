/// This crate weights two-class sentiment corpora with TF-IDF and Delta TF-IDF schemes.
pub mod vectorizer;
pub mod config;
pub mod error;
pub mod export;
pub mod source;

/// Delta TF-IDF Vectorizer
/// The top-level struct of this crate.
/// It takes the lines of two classes, builds the occurrence statistics, and
/// computes a TF-IDF weight for every (document, term) pair.
///
/// Internally, it holds:
/// - The corpus context (per-term class counts, IDF, max TF, class totals)
/// - The documents with their per-term counts, TF and weights
/// - The weighting configuration
/// - An outcome report of the last run
///
/// The phases always run in this order, each over the whole corpus:
/// aggregation, IDF, TF, combination.
///
/// # Serialization
/// Supported, see `export::snapshot`.
pub use vectorizer::DeltaTfIdfVectorizer;

/// Corpus for the vectorizer
/// Keeps, per term, the occurrence count in each class, the IDF and the
/// maximum TF, plus the total token count of each class.
/// The vocabulary is kept in lexicographic order; a term's position is its
/// column in dense vectors.
pub use vectorizer::corpus::{ClassTotals, Corpus, CorpusTermStats};

/// Document structure
/// One non-empty input line with its class label, its per-term counts, and
/// the TF and weight of each of its terms.
pub use vectorizer::document::{ClassLabel, Document, DocumentTermWeight};

/// Occurrence aggregation
/// Builds documents and corpus statistics from lines of the two classes.
pub use vectorizer::aggregate::Aggregator;

/// TF and IDF formulas
/// - TF: natural, logarithm, augmented, boolean
/// - IDF: normal_idf, prob, bm25, delta, delta_smoothed, delta_prob, delta_prob_smoothed
pub use vectorizer::idf::IdfScheme;
pub use vectorizer::tf::TfScheme;

/// Weight outcomes
/// Infinite, negative and NaN weights are valid results of some schemes and
/// are reported rather than corrected.
pub use vectorizer::weight::{WeightOutcome, WeightReport};

pub use config::{ExportConfig, WeightingConfig};
pub use error::{DeltaTfIdfError, ExportError, ParseSchemeError};
pub use source::{FileSource, LineSource};
