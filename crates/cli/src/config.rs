use crate::command::PROGRAM_NAME;
use clap::ArgMatches;
use engine::{CopyPolicy, MetadataOptions};
use scheduler::SchedulerConfig;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Invalid or unusable start-up configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The interval is not an integer.
    #[error("invalid interval '{value}': expected a whole number of seconds")]
    InvalidInterval {
        /// Text as supplied.
        value: String,
    },
    /// The interval is zero or negative.
    #[error("invalid interval '{value}': must be greater than zero")]
    NonPositiveInterval {
        /// Text as supplied.
        value: String,
    },
    /// A required argument was absent.
    #[error("missing required argument <{0}>")]
    MissingArgument(&'static str),
    /// The log file could not be opened for appending.
    #[error("cannot open log file '{}': {source}", path.display())]
    LogFile {
        /// Log file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

/// Options collected from the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    source: PathBuf,
    replica: PathBuf,
    interval: Duration,
    log_file: PathBuf,
    once: bool,
    skip_unchanged: bool,
    preserve_permissions: bool,
    preserve_times: bool,
    quiet: bool,
}

impl Config {
    /// Builds a configuration from parsed arguments.
    pub(crate) fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let path = |id: &'static str| {
            matches
                .get_one::<PathBuf>(id)
                .cloned()
                .ok_or(ConfigError::MissingArgument(id))
        };
        let interval = matches
            .get_one::<OsString>("interval")
            .ok_or(ConfigError::MissingArgument("interval"))?;

        Ok(Self {
            source: path("source")?,
            replica: path("replica")?,
            interval: parse_interval(&interval.to_string_lossy())?,
            log_file: path("log-file")?,
            once: matches.get_flag("once"),
            skip_unchanged: matches.get_flag("skip-unchanged"),
            preserve_permissions: !matches.get_flag("no-perms"),
            preserve_times: !matches.get_flag("no-times"),
            quiet: matches.get_flag("quiet"),
        })
    }

    /// Source folder.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Replica folder.
    #[must_use]
    pub fn replica(&self) -> &Path {
        &self.replica
    }

    /// Delay between passes.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Log file path.
    #[must_use]
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Whether a single pass was requested.
    #[must_use]
    pub const fn once(&self) -> bool {
        self.once
    }

    /// Whether the console copy of the log is suppressed.
    #[must_use]
    pub const fn quiet(&self) -> bool {
        self.quiet
    }

    /// Copy policy selected by `--skip-unchanged`.
    #[must_use]
    pub const fn copy_policy(&self) -> CopyPolicy {
        if self.skip_unchanged {
            CopyPolicy::QuickCheck
        } else {
            CopyPolicy::Always
        }
    }

    /// Metadata selected by `--no-perms` and `--no-times`.
    #[must_use]
    pub const fn metadata_options(&self) -> MetadataOptions {
        MetadataOptions::new()
            .preserve_permissions(self.preserve_permissions)
            .preserve_times(self.preserve_times)
    }

    /// Scheduler configuration equivalent to these options.
    #[must_use]
    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig::new(&self.source, &self.replica, self.interval)
            .copy_policy(self.copy_policy())
            .metadata_options(self.metadata_options())
    }
}

/// Parses a positive whole number of seconds.
pub(crate) fn parse_interval(text: &str) -> Result<Duration, ConfigError> {
    let trimmed = text.trim_matches(|ch: char| ch.is_ascii_whitespace());
    match trimmed.parse::<u64>() {
        Ok(0) => Err(ConfigError::NonPositiveInterval {
            value: text.to_owned(),
        }),
        Ok(seconds) => Ok(Duration::from_secs(seconds)),
        Err(_) if trimmed.parse::<i64>().is_ok() => Err(ConfigError::NonPositiveInterval {
            value: text.to_owned(),
        }),
        Err(_) => Err(ConfigError::InvalidInterval {
            value: text.to_owned(),
        }),
    }
}

/// Renders a start-up diagnostic the way every front-end error is printed.
pub(crate) fn render_error(error: &ConfigError) -> String {
    format!("{PROGRAM_NAME}: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::clap_command;

    fn matches(args: &[&str]) -> ArgMatches {
        clap_command()
            .try_get_matches_from(std::iter::once("dirmirror").chain(args.iter().copied()))
            .expect("parse")
    }

    #[test]
    fn positional_arguments_are_collected() {
        let config =
            Config::from_matches(&matches(&["src", "dst", "30", "sync.log"])).expect("config");
        assert_eq!(config.source(), Path::new("src"));
        assert_eq!(config.replica(), Path::new("dst"));
        assert_eq!(config.interval(), Duration::from_secs(30));
        assert_eq!(config.log_file(), Path::new("sync.log"));
        assert!(!config.once());
        assert!(!config.quiet());
        assert_eq!(config.copy_policy(), CopyPolicy::Always);
        assert_eq!(config.metadata_options(), MetadataOptions::default());
    }

    #[test]
    fn flags_are_collected() {
        let config = Config::from_matches(&matches(&[
            "--once",
            "--skip-unchanged",
            "-q",
            "src",
            "dst",
            "5",
            "sync.log",
        ]))
        .expect("config");
        assert!(config.once());
        assert!(config.quiet());
        assert_eq!(config.copy_policy(), CopyPolicy::QuickCheck);
        assert_eq!(config.scheduler_config().policy(), CopyPolicy::QuickCheck);
    }

    #[test]
    fn metadata_flags_reach_the_scheduler() {
        let config = Config::from_matches(&matches(&[
            "--no-times",
            "src",
            "dst",
            "5",
            "sync.log",
        ]))
        .expect("config");
        let metadata = config.scheduler_config().metadata();
        assert!(!metadata.times());
        assert!(metadata.permissions());

        let config = Config::from_matches(&matches(&["--no-perms", "src", "dst", "5", "sync.log"]))
            .expect("config");
        assert!(!config.metadata_options().permissions());
        assert!(config.metadata_options().times());
    }

    #[test]
    fn interval_must_be_a_positive_integer() {
        assert_eq!(parse_interval("10").expect("ten"), Duration::from_secs(10));
        assert_eq!(parse_interval(" 7 ").expect("seven"), Duration::from_secs(7));
        assert!(matches!(
            parse_interval("0"),
            Err(ConfigError::NonPositiveInterval { .. })
        ));
        assert!(matches!(
            parse_interval("-5"),
            Err(ConfigError::NonPositiveInterval { .. })
        ));
        assert!(matches!(
            parse_interval("abc"),
            Err(ConfigError::InvalidInterval { .. })
        ));
        assert!(matches!(
            parse_interval("1.5"),
            Err(ConfigError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn negative_interval_is_not_mistaken_for_a_flag() {
        let error = Config::from_matches(&matches(&["src", "dst", "-3", "sync.log"]))
            .expect_err("negative interval");
        assert_eq!(
            render_error(&error),
            "dirmirror: invalid interval '-3': must be greater than zero"
        );
    }
}
