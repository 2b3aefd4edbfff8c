use serde::{Deserialize, Serialize};

use crate::vectorizer::idf::IdfScheme;
use crate::vectorizer::tf::TfScheme;

/// Which TF and IDF formulas a run uses
///
/// Missing fields fall back to `natural` / `delta_smoothed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingConfig {
    pub tf_scheme: TfScheme,
    pub idf_scheme: IdfScheme,
}

impl WeightingConfig {
    pub const fn new(tf_scheme: TfScheme, idf_scheme: IdfScheme) -> Self {
        Self { tf_scheme, idf_scheme }
    }
}

/// Layout options of the ARFF export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// `@RELATION` name
    pub relation: String,
    /// nominal value written for class 1 documents
    pub class1_name: String,
    /// nominal value written for class 2 documents
    pub class2_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            relation: "tweets".to_string(),
            class1_name: "pos".to_string(),
            class2_name: "neg".to_string(),
        }
    }
}
