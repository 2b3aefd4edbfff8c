use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::export::dense_rows;
use crate::vectorizer::document::ClassLabel;
use crate::DeltaTfIdfVectorizer;

/// Weka ARFF writer
///
/// One `REAL` attribute per vocabulary term, named `a1..aN` in vocabulary
/// order, followed by the nominal class attribute.
#[derive(Debug, Clone, Default)]
pub struct ArffWriter {
    config: ExportConfig,
}

impl ArffWriter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Write the dataset to `writer`
    pub fn write<W: Write>(&self, vectorizer: &DeltaTfIdfVectorizer, mut writer: W) -> Result<(), ExportError> {
        writeln!(writer, "@RELATION {}", quote(&self.config.relation))?;
        writeln!(writer)?;
        for column in 1..=vectorizer.vocab_size() {
            writeln!(writer, "@ATTRIBUTE a{column} REAL")?;
        }
        writeln!(
            writer,
            "@ATTRIBUTE class {{{},{}}}",
            quote(&self.config.class1_name),
            quote(&self.config.class2_name)
        )?;
        writeln!(writer)?;
        writeln!(writer, "@DATA")?;

        for row in dense_rows::<f64>(vectorizer) {
            for value in &row.values {
                write!(writer, "{},", format_value(*value))?;
            }
            writeln!(writer, "{}", quote(self.class_name(row.class)))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the dataset to a file at `path`
    pub fn write_to_path<P: AsRef<Path>>(&self, vectorizer: &DeltaTfIdfVectorizer, path: P) -> Result<(), ExportError> {
        let file = File::create(path.as_ref())?;
        self.write(vectorizer, BufWriter::new(file))?;
        info!(
            "wrote {} rows x {} attributes to {}",
            vectorizer.doc_num(),
            vectorizer.vocab_size(),
            path.as_ref().display()
        );
        Ok(())
    }

    fn class_name(&self, class: ClassLabel) -> &str {
        match class {
            ClassLabel::Class1 => &self.config.class1_name,
            ClassLabel::Class2 => &self.config.class2_name,
        }
    }
}

/// ARFF spelling of a weight
fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{value:?}")
    }
}

/// single-quote names ARFF would otherwise split
fn quote(name: &str) -> String {
    if name.is_empty() || name.chars().any(|c| c.is_whitespace() || matches!(c, ',' | '{' | '}' | '\'' | '%')) {
        format!("'{}'", name.replace('\'', "\\'"))
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeightingConfig;
    use crate::vectorizer::idf::IdfScheme;
    use crate::vectorizer::tf::TfScheme;

    fn render(v: &DeltaTfIdfVectorizer, config: ExportConfig) -> String {
        let mut out = Vec::new();
        ArffWriter::new(config).write(v, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_rows() {
        let config = WeightingConfig::new(TfScheme::Boolean, IdfScheme::Delta);
        let v = DeltaTfIdfVectorizer::new(&["x y"], &["y z"], config).unwrap();
        let text = render(&v, ExportConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "@RELATION tweets",
                "",
                "@ATTRIBUTE a1 REAL",
                "@ATTRIBUTE a2 REAL",
                "@ATTRIBUTE a3 REAL",
                "@ATTRIBUTE class {pos,neg}",
                "",
                "@DATA",
                "-Infinity,0.0,0.0,pos",
                "0.0,0.0,Infinity,neg",
            ]
        );
    }

    #[test]
    fn custom_names_are_quoted_when_needed() {
        let v = DeltaTfIdfVectorizer::new(&["x"], &["y"], WeightingConfig::default()).unwrap();
        let config = ExportConfig {
            relation: "movie reviews".to_string(),
            class1_name: "good".to_string(),
            class2_name: "bad".to_string(),
        };
        let text = render(&v, config);
        assert!(text.starts_with("@RELATION 'movie reviews'\n"));
        assert!(text.contains("@ATTRIBUTE class {good,bad}\n"));
        assert!(text.trim_end().ends_with(",bad"));
    }

    #[test]
    fn value_spelling() {
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }
}
