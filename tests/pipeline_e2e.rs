use std::io::Write;

use delta_tf_idf::export::arff::ArffWriter;
use delta_tf_idf::{
    ClassLabel, DeltaTfIdfError, DeltaTfIdfVectorizer, ExportConfig, FileSource, IdfScheme, TfScheme,
    WeightingConfig,
};

fn write_lines(dir: &tempfile::TempDir, name: &str, lines: &[&str]) -> FileSource {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    FileSource::new(path)
}

#[test]
fn good_movie_bad_movie_with_delta() {
    let dir = tempfile::tempdir().unwrap();
    let pos = write_lines(&dir, "pos.txt", &["good movie", "good film"]);
    let neg = write_lines(&dir, "neg.txt", &["bad movie"]);
    let config = WeightingConfig::new(TfScheme::Natural, IdfScheme::Delta);

    let v = DeltaTfIdfVectorizer::from_sources(&pos, &neg, config).unwrap();

    let good = v.corpus().term_stats("good").unwrap();
    assert_eq!((good.class1_occurrences, good.class2_occurrences), (2, 0));
    // c1 * n2 = 0 over c2 * n1 = 4
    assert_eq!(v.idf("good"), Some(f64::NEG_INFINITY));
    assert_eq!(v.idf("bad"), Some(f64::INFINITY));

    let movie_idf = v.idf("movie").unwrap();
    assert!((movie_idf - 2f64.log10()).abs() < 1e-12);

    let first = v.document(0).unwrap();
    assert_eq!(first.class(), ClassLabel::Class1);
    assert_eq!(first.term_weight("good").unwrap().tf, 0.5);
    assert_eq!(first.weight("good"), Some(f64::NEG_INFINITY));
    assert!((first.weight("movie").unwrap() - 0.1505149978319906).abs() < 1e-12);
}

#[test]
fn empty_lines_contribute_nothing() {
    let with_empty = DeltaTfIdfVectorizer::new(
        &["good movie", "", "good film", ""],
        &["", "bad movie"],
        WeightingConfig::default(),
    )
    .unwrap();
    let without = DeltaTfIdfVectorizer::new(&["good movie", "good film"], &["bad movie"], WeightingConfig::default())
        .unwrap();

    assert_eq!(with_empty.doc_num(), 3);
    assert_eq!(with_empty.totals(), without.totals());
    assert_eq!(with_empty.documents(), without.documents());
}

#[test]
fn whitespace_only_line_is_an_all_zero_row() {
    let v = DeltaTfIdfVectorizer::new(&["good movie", "   "], &["bad movie"], WeightingConfig::default()).unwrap();

    assert_eq!(v.doc_num(), 3);
    let blank = v.document(1).unwrap();
    assert_eq!(blank.class(), ClassLabel::Class1);
    assert_eq!(blank.term_sum(), 0);
    assert_eq!(v.totals().class1, 2);

    let mut out = Vec::new();
    ArffWriter::new(ExportConfig::default()).write(&v, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let data: Vec<&str> = text.lines().skip_while(|l| *l != "@DATA").skip(1).collect();
    assert_eq!(data.len(), 3);
    assert_eq!(data[1], "0.0,0.0,0.0,pos");
}

#[test]
fn single_class_corpus_gives_nan_under_delta() {
    let class2: [&str; 0] = [];
    let config = WeightingConfig::new(TfScheme::Natural, IdfScheme::Delta);
    let v = DeltaTfIdfVectorizer::new(&["good movie"], &class2, config).unwrap();

    // c1 * 0 over 0 * n1
    assert!(v.idf("good").unwrap().is_nan());
    assert!(v.idf("movie").unwrap().is_nan());
    assert_eq!(v.report().not_a_number, 2);
    assert_eq!(v.report().infinite, 0);

    let mut out = Vec::new();
    ArffWriter::new(ExportConfig::default()).write(&v, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let data: Vec<&str> = text.lines().skip_while(|l| *l != "@DATA").skip(1).collect();
    assert_eq!(data, vec!["NaN,NaN,pos"]);
}

#[test]
fn augmented_tf_over_the_whole_corpus() {
    let config = WeightingConfig::new(TfScheme::Augmented, IdfScheme::DeltaSmoothed);
    let v = DeltaTfIdfVectorizer::new(&["w a b c d"], &["w e f g h i j k l m"], config).unwrap();

    assert_eq!(v.document(0).unwrap().term_weight("w").unwrap().tf, 1.0);
    assert!((v.document(1).unwrap().term_weight("w").unwrap().tf - 0.75).abs() < 1e-12);
    for doc in v.documents() {
        for (_, w) in doc.iter() {
            assert!((0.5..=1.0).contains(&w.tf));
        }
    }
}

#[test]
fn statistics_are_consistent_for_every_scheme() {
    let class1 = ["a b a c", "c c d", "e"];
    let class2 = ["a d d", "b e e e f", "f"];
    for tf_scheme in TfScheme::ALL {
        for idf_scheme in IdfScheme::ALL {
            let v = DeltaTfIdfVectorizer::new(&class1, &class2, WeightingConfig::new(tf_scheme, idf_scheme)).unwrap();

            for (term, stats) in v.corpus().iter() {
                let sum: u64 = v.documents().iter().map(|d| d.term_count(term)).sum();
                assert_eq!(stats.occurrences(), sum);
            }
            for doc in v.documents() {
                let sum: u64 = doc.iter().map(|(_, w)| w.occurrences).sum();
                assert_eq!(sum, doc.term_sum());
            }
            if !idf_scheme.is_unsmoothed_delta() && idf_scheme != IdfScheme::Prob {
                assert_eq!(v.report().infinite, 0, "{tf_scheme}/{idf_scheme}");
            }
        }
    }
}

#[test]
fn missing_class_file_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let pos = write_lines(&dir, "pos.txt", &["good movie"]);
    let neg = FileSource::new(dir.path().join("neg.txt"));

    let err = DeltaTfIdfVectorizer::from_sources(&pos, &neg, WeightingConfig::default()).unwrap_err();
    assert!(matches!(err, DeltaTfIdfError::SourceUnavailable { .. }));
}

#[test]
fn arff_file_has_one_row_per_document() {
    let dir = tempfile::tempdir().unwrap();
    let v = DeltaTfIdfVectorizer::new(&["good movie", "good film"], &["bad movie"], WeightingConfig::default())
        .unwrap();
    let path = dir.path().join("out.arff");
    ArffWriter::new(ExportConfig::default()).write_to_path(&v, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let data: Vec<&str> = text.lines().skip_while(|l| *l != "@DATA").skip(1).collect();
    assert_eq!(data.len(), 3);
    for row in &data {
        assert_eq!(row.split(',').count(), v.vocab_size() + 1);
    }
    assert!(data[2].ends_with(",neg"));
}
