use crate::severity::Severity;
use std::io::{self, Write};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Timestamp layout used for every rendered line.
pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero],[subsecond digits:3]"
);

/// One log line before rendering.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    timestamp: OffsetDateTime,
    severity: Severity,
    message: String,
}

impl Record {
    /// Creates a record with an explicit timestamp.
    #[must_use]
    pub fn new(timestamp: OffsetDateTime, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            severity,
            message: message.into(),
        }
    }

    /// Creates a record stamped with the current local time.
    ///
    /// Falls back to UTC when the local offset cannot be determined.
    #[must_use]
    pub fn now(severity: Severity, message: impl Into<String>) -> Self {
        let timestamp = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::new(timestamp, severity, message)
    }

    /// Severity of the record.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Free-text message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the record as a single line, including the trailing newline.
    pub fn render_line<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        let stamp = self
            .timestamp
            .format(TIMESTAMP_FORMAT)
            .map_err(io::Error::other)?;
        writeln!(writer, "{stamp} [{}]: {}", self.severity, self.message)
    }
}
