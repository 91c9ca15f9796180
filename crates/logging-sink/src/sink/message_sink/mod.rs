use std::fmt;

mod writing;

/// Streaming sink that renders [`Record`](crate::Record) values into an
/// [`std::io::Write`] target.
///
/// Each record becomes one line. The writer is flushed after every line so
/// that a log file stays current even when the process is killed between
/// passes.
///
/// # Examples
///
/// ```
/// use logging_sink::{MessageSink, Sink};
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.error("failed to copy '/src/a': permission denied");
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.contains("[ERROR]: failed to copy"));
/// assert!(output.ends_with('\n'));
/// ```
pub struct MessageSink<W> {
    writer: W,
}

impl<W> MessageSink<W> {
    /// Creates a sink writing into `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the wrapped writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the wrapped writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .finish()
    }
}
