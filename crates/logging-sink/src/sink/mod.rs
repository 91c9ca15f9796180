use crate::record::Record;
use crate::severity::Severity;
use std::io;

mod memory;
mod message_sink;
mod tee;

pub use memory::MemorySink;
pub use message_sink::MessageSink;
pub use tee::TeeSink;

/// Destination for log records.
///
/// Implementors only provide [`emit`](Self::emit); the severity helpers stamp
/// the current time and swallow write errors after reporting them through
/// `tracing`.
pub trait Sink {
    /// Writes a fully built record.
    fn emit(&mut self, record: &Record) -> io::Result<()>;

    /// Builds a record stamped with the current time and emits it.
    fn log(&mut self, severity: Severity, message: &str) {
        let record = Record::now(severity, message);
        if let Err(error) = self.emit(&record) {
            tracing::warn!(target: "dirmirror::log", %error, "failed to write log record");
        }
    }

    /// Logs an informational message.
    fn info(&mut self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Logs a warning.
    fn warn(&mut self, message: &str) {
        self.log(Severity::Warning, message);
    }

    /// Logs an error.
    fn error(&mut self, message: &str) {
        self.log(Severity::Error, message);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        (**self).emit(record)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        (**self).emit(record)
    }
}

/// `None` discards every record, which lets callers make a sink optional.
impl<S: Sink> Sink for Option<S> {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        match self {
            Some(sink) => sink.emit(record),
            None => Ok(()),
        }
    }
}
