use std::fmt;

/// Severity attached to every [`Record`](crate::Record).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Severity {
    /// Creations, copies and pass completion.
    Info,
    /// Removals and entries that were skipped.
    Warning,
    /// Operations that failed.
    Error,
}

impl Severity {
    /// Label rendered between brackets in a log line.
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Info.label(), "INFO");
    /// assert_eq!(Severity::Warning.label(), "WARNING");
    /// assert_eq!(Severity::Error.label(), "ERROR");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
