use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::RecordChannel;

/// Appending writer over a delimited text file, one record per line.
/// The file is truncated at construction.
pub struct CsvSink {
    path: PathBuf,
    delimiter: char,
    file: Option<File>,
}

impl CsvSink {
    /// Create (or truncate) the output file. An open failure leaves the
    /// sink unready; every subsequent write returns `false`.
    pub fn create(path: impl AsRef<Path>, delimiter: char) -> Self {
        let path = path.as_ref().to_path_buf();
        let file = match File::create(&path) {
            Ok(file) => {
                tracing::info!(path = %path.display(), "Opened output file");
                Some(file)
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Error opening output file");
                None
            }
        };
        Self {
            path,
            delimiter,
            file,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordChannel for CsvSink {
    fn is_ready(&self) -> bool {
        self.file.is_some()
    }

    fn next_record(&mut self) -> Option<Vec<String>> {
        None
    }

    fn write_record(&mut self, fields: &[String]) -> bool {
        let Some(file) = self.file.as_mut() else {
            return false;
        };

        let mut line = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(self.delimiter);
            }
            line.push_str(field);
        }
        line.push('\n');

        match file.write_all(line.as_bytes()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Write failed");
                false
            }
        }
    }
}
