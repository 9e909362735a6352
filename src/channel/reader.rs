use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::RecordChannel;

/// Sequential reader over a delimited text file, one record per line.
pub struct CsvSource {
    path: PathBuf,
    delimiter: char,
    reader: Option<BufReader<File>>,
}

impl CsvSource {
    /// Open the file for reading. An open failure leaves the source
    /// unready rather than erroring; every subsequent read returns `None`.
    pub fn open(path: impl AsRef<Path>, delimiter: char) -> Self {
        let path = path.as_ref().to_path_buf();
        let reader = match File::open(&path) {
            Ok(file) => {
                tracing::info!(path = %path.display(), "Opened input file");
                Some(BufReader::new(file))
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Error opening input file");
                None
            }
        };
        Self {
            path,
            delimiter,
            reader,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordChannel for CsvSource {
    fn is_ready(&self) -> bool {
        self.reader.is_some()
    }

    fn next_record(&mut self) -> Option<Vec<String>> {
        let reader = self.reader.as_mut()?;

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Read error, stopping");
                return None;
            }
        }

        // A blank line splits into no fields and terminates the stream.
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return None;
        }

        Some(line.split(self.delimiter).map(str::to_string).collect())
    }

    fn write_record(&mut self, _fields: &[String]) -> bool {
        false
    }
}
