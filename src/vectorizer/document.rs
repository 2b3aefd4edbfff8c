use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Which of the two input collections a document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassLabel {
    Class1,
    Class2,
}

impl ClassLabel {
    /// 1 or 2, the numbering used by the formulas
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            ClassLabel::Class1 => 1,
            ClassLabel::Class2 => 2,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class{}", self.number())
    }
}

/// Per (document, term) statistics.
///
/// `tf` and `tf_idf` stay `0.0` until the TF phase and the combine phase
/// have written them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentTermWeight {
    /// raw occurrence count of the term in the document
    pub occurrences: u64,
    pub tf: f64,
    pub tf_idf: f64,
}

impl DocumentTermWeight {
    fn new() -> Self {
        Self {
            occurrences: 0,
            tf: 0.0,
            tf_idf: 0.0,
        }
    }

    /// `occurrences / document_total`, the base of every TF scheme
    #[inline]
    pub fn natural_tf(&self, document_total: u64) -> f64 {
        self.occurrences as f64 / document_total as f64
    }
}

/// Document
/// One non-empty input line of one class. A line of only whitespace gives
/// a document without terms.
///
/// Holds:
/// - the term -> weight mapping, in the order the terms were first encountered
/// - the total token count of the line
/// - the class label
///
/// # Examples
/// ```
/// use delta_tf_idf::{ClassLabel, Document};
/// let mut doc = Document::new(ClassLabel::Class1);
/// doc.add_terms(&["good", "movie", "good"]);
///
/// assert_eq!(doc.term_count("good"), 2);
/// assert_eq!(doc.term_sum(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    class: ClassLabel,
    #[serde(with = "indexmap::map::serde_seq")]
    term_weights: IndexMap<Box<str>, DocumentTermWeight>,
    total_term_count: u64,
}

/// Adding terms
impl Document {
    /// Create an empty document of the given class
    pub fn new(class: ClassLabel) -> Self {
        Document {
            class,
            term_weights: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        self.term_weights
            .entry(term.into())
            .or_insert_with(DocumentTermWeight::new)
            .occurrences += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Reading
impl Document {
    #[inline]
    pub fn class(&self) -> ClassLabel {
        self.class
    }

    /// Total token count of the document
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Raw occurrence count of `term`, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_weights.get(term).map_or(0, |w| w.occurrences)
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_weights.len()
    }

    /// Whether the document has no terms at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_weights.is_empty()
    }

    /// Terms in first-encounter order
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_weights.keys().map(|t| &**t)
    }

    #[inline]
    pub fn term_weight(&self, term: &str) -> Option<&DocumentTermWeight> {
        self.term_weights.get(term)
    }

    /// Iterate `(term, weight statistics)` in first-encounter order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentTermWeight)> {
        self.term_weights.iter().map(|(t, w)| (&**t, w))
    }

    /// Final TF-IDF weight of `term`, `None` when absent
    #[inline]
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.term_weights.get(term).map(|w| w.tf_idf)
    }

    /// Iterate `(term, tf_idf)` in first-encounter order
    #[inline]
    pub fn weights(&self) -> impl Iterator<Item = (&str, f64)> {
        self.term_weights.iter().map(|(t, w)| (&**t, w.tf_idf))
    }

    #[inline]
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut DocumentTermWeight)> {
        self.term_weights.iter_mut().map(|(t, w)| (&**t, w))
    }
}
