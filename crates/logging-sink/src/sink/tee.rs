use crate::record::Record;
use crate::sink::Sink;
use std::io;

/// Duplicates every record to two sinks.
///
/// Both sinks always receive the record; when either fails, the first error
/// is returned after the other sink has been written.
#[derive(Debug, Default)]
pub struct TeeSink<A, B> {
    first: A,
    second: B,
}

impl<A, B> TeeSink<A, B> {
    /// Creates a sink that writes to `first`, then `second`.
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Consumes the tee and returns both sinks.
    #[must_use]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Sink, B: Sink> Sink for TeeSink<A, B> {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        let first = self.first.emit(record);
        let second = self.second.emit(record);
        first.and(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemorySink, Severity};
    use std::io::Write;

    struct FailingSink;

    impl Sink for FailingSink {
        fn emit(&mut self, _record: &Record) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn both_sinks_receive_every_record() {
        let mut tee = TeeSink::new(MemorySink::new(), MemorySink::new());
        tee.info("one");
        tee.warn("two");
        let (first, second) = tee.into_parts();
        assert_eq!(first.messages(), vec!["one", "two"]);
        assert_eq!(second.messages(), vec!["one", "two"]);
    }

    #[test]
    fn failure_in_first_sink_does_not_starve_second() {
        let mut tee = TeeSink::new(FailingSink, MemorySink::new());
        let record = Record::now(Severity::Info, "still delivered");
        let error = tee.emit(&record).expect_err("first sink fails");
        assert_eq!(error.to_string(), "disk full");
        let (_, memory) = tee.into_parts();
        assert_eq!(memory.messages(), vec!["still delivered"]);
    }

    #[test]
    fn optional_sink_can_be_disabled() {
        let mut tee: TeeSink<MemorySink, Option<MemorySink>> =
            TeeSink::new(MemorySink::new(), None);
        tee.info("only once");
        let (memory, console) = tee.into_parts();
        assert_eq!(memory.len(), 1);
        assert!(console.is_none());
    }

    #[test]
    fn writer_backed_sinks_compose() {
        let mut tee = TeeSink::new(
            crate::MessageSink::new(Vec::new()),
            crate::MessageSink::new(Vec::new()),
        );
        tee.error("boom");
        let (mut a, b) = tee.into_parts();
        a.writer_mut().flush().expect("flush");
        assert_eq!(a.into_inner(), b.into_inner());
    }
}
