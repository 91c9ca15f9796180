use crate::command::{PROGRAM_NAME, clap_command};
use crate::config::{Config, ConfigError, render_error};
use crate::diagnostics::init_diagnostics;
use crate::exit_code::ExitCode;
use logging_sink::{MessageSink, Sink, TeeSink};
use scheduler::{Scheduler, StopSignal, install_signal_handlers};
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Log lines are appended to the configured log file and, unless `--quiet` is
/// given, written to `stdout`. Start-up diagnostics go to `stderr`. The return
/// value is the process exit code.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let rendered = error.render().to_string();
            let _ = if error.use_stderr() {
                write!(stderr, "{rendered}")
            } else {
                write!(stdout, "{rendered}")
            };
            return error.exit_code();
        }
    };

    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(error) => return report(stderr, &error, ExitCode::Syntax).as_i32(),
    };

    init_diagnostics();
    execute(&config, stdout, stderr).as_i32()
}

fn execute<Out, Err>(config: &Config, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Out: Write,
    Err: Write,
{
    let log = match MessageSink::append_to_file(config.log_file()) {
        Ok(log) => log,
        Err(source) => {
            let error = ConfigError::LogFile {
                path: config.log_file().to_path_buf(),
                source,
            };
            return report(stderr, &error, ExitCode::FileIo);
        }
    };
    let console = (!config.quiet()).then(|| MessageSink::new(&mut *stdout));
    let mut sink = TeeSink::new(log, console);

    let stop = StopSignal::new();
    let scheduler = match Scheduler::with_stop_signal(config.scheduler_config(), stop.clone()) {
        Ok(scheduler) => scheduler,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            return ExitCode::Syntax;
        }
    };

    let handlers = match install_signal_handlers(&stop) {
        Ok(handlers) => Some(handlers),
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: warning: {error}");
            None
        }
    };

    let status = if config.once() {
        match scheduler.run_once(&mut sink) {
            Ok(summary) if summary.failures() == 0 => ExitCode::Ok,
            Ok(_) => ExitCode::PartialTransfer,
            Err(error) => {
                sink.error(&error.to_string());
                ExitCode::FileSelect
            }
        }
    } else {
        let report = scheduler.run(&mut sink);
        debug!(
            target: "dirmirror::cli",
            passes = report.passes(),
            failed = report.failed_passes(),
            "scheduler returned"
        );
        ExitCode::Ok
    };

    if let Some(handlers) = handlers {
        handlers.uninstall();
    }
    status
}

fn report<Err: Write>(stderr: &mut Err, error: &ConfigError, code: ExitCode) -> ExitCode {
    let _ = writeln!(stderr, "{}", render_error(error));
    code
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
