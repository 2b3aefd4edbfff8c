use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Something that yields the lines of one class collection
///
/// Reading is a one-shot acquisition: every call opens, reads and releases
/// the underlying resource.
pub trait LineSource {
    /// Read every line, in order
    fn read_lines(&self) -> io::Result<Vec<String>>;

    /// Name used in error messages and logs
    fn describe(&self) -> String;
}

/// A UTF-8 text file, one document per line
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> io::Result<Vec<String>> {
        let reader = BufReader::new(File::open(&self.path)?);
        reader.lines().collect()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl<T> LineSource for [T]
where
    T: AsRef<str>,
{
    fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(self.iter().map(|l| l.as_ref().to_string()).collect())
    }

    fn describe(&self) -> String {
        format!("<memory: {} lines>", self.len())
    }
}

impl<T> LineSource for Vec<T>
where
    T: AsRef<str>,
{
    fn read_lines(&self) -> io::Result<Vec<String>> {
        self.as_slice().read_lines()
    }

    fn describe(&self) -> String {
        self.as_slice().describe()
    }
}
