use super::MessageSink;
use crate::record::Record;
use crate::sink::Sink;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

impl MessageSink<File> {
    /// Opens `path` for appending, creating it when missing.
    ///
    /// Existing content is never truncated, so successive runs accumulate in
    /// the same log file.
    pub fn append_to_file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W> Sink for MessageSink<W>
where
    W: Write,
{
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        record.render_line(&mut self.writer)?;
        self.writer.flush()
    }
}
