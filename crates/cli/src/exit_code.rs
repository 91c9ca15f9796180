//! Process exit codes.
//!
//! The numeric values follow rsync's `errcode.h` where a matching code exists,
//! so scripts that already understand rsync's statuses can reuse them.

use std::fmt;

/// Exit statuses of the `dirmirror` process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion or a clean shutdown.
    Ok = 0,

    /// Invalid argument value, such as a non-positive interval.
    Syntax = 1,

    /// A root directory could not be prepared in `--once` mode.
    FileSelect = 3,

    /// The log file could not be opened.
    FileIo = 11,

    /// A second termination signal forced an immediate exit.
    ///
    /// [`run`](crate::run) never returns this status. The signal handler
    /// installed by [`scheduler::install_signal_handlers`] exits the process
    /// with it directly.
    Signal = scheduler::SIGNAL_EXIT_CODE,

    /// A `--once` pass finished with entry failures.
    PartialTransfer = 23,
}

impl ExitCode {
    /// Numeric status.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Short description of the status.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Syntax => "syntax or usage error",
            Self::FileSelect => "errors selecting input/output files, dirs",
            Self::FileIo => "error in file I/O",
            Self::Signal => "received SIGINT, SIGTERM, or SIGHUP",
            Self::PartialTransfer => "some files could not be transferred",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.description(), self.as_i32())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
