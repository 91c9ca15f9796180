use clap::builder::OsStringValueParser;
use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

pub(crate) const PROGRAM_NAME: &str = "dirmirror";

pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Periodically mirror a source folder onto a replica folder")
        .arg(
            Arg::new("source")
                .value_name("source_folder")
                .help("Folder to mirror; created empty when missing")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("replica")
                .value_name("replica_folder")
                .help("Folder kept identical to the source; created when missing")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("interval")
                .value_name("interval_seconds")
                .help("Seconds to wait between synchronization passes")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("log-file")
                .value_name("log_file")
                .help("File that every log line is appended to")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Run a single pass and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("skip-unchanged")
                .long("skip-unchanged")
                .help("Skip files whose size and modification time already match")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-perms")
                .long("no-perms")
                .help("Do not copy permission bits onto replica files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-times")
                .long("no-times")
                .help("Do not copy modification and access times onto replica files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not echo log lines to standard output")
                .action(ArgAction::SetTrue),
        )
}
