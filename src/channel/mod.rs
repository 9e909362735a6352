mod reader;
mod writer;

pub use reader::CsvSource;
pub use writer::CsvSink;

/// One-record-at-a-time channel over a delimited text resource.
///
/// A channel is established ready or unready at construction and never
/// recovers; operations on an unready channel return the benign sentinel
/// (`None` / `false`) instead of failing hard. Concrete channels are
/// single-direction, and calling the other direction yields the same
/// sentinel so the engine can compose them generically.
pub trait RecordChannel {
    /// Whether the underlying resource was opened successfully.
    fn is_ready(&self) -> bool;

    /// Next record as ordered text fields, `None` when exhausted, unready,
    /// or not a source. Strictly forward-only.
    fn next_record(&mut self) -> Option<Vec<String>>;

    /// Append one record; `false` when the write failed, the channel is
    /// unready, or it is not a sink.
    fn write_record(&mut self, fields: &[String]) -> bool;
}
