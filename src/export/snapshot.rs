use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::DeltaTfIdfVectorizer;

/// Serialize a computed vectorizer as CBOR
///
/// Holds the configuration, the corpus statistics and every document with
/// its counts, TF and weights, so nothing has to be recomputed on load.
pub fn write_snapshot<W: Write>(vectorizer: &DeltaTfIdfVectorizer, writer: W) -> Result<(), ExportError> {
    serde_cbor::to_writer(writer, vectorizer)?;
    Ok(())
}

pub fn read_snapshot<R: Read>(reader: R) -> Result<DeltaTfIdfVectorizer, ExportError> {
    Ok(serde_cbor::from_reader(reader)?)
}

pub fn save_snapshot<P: AsRef<Path>>(vectorizer: &DeltaTfIdfVectorizer, path: P) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_snapshot(vectorizer, &mut writer)?;
    writer.flush()?;
    Ok(())
}

pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<DeltaTfIdfVectorizer, ExportError> {
    read_snapshot(BufReader::new(File::open(path)?))
}
