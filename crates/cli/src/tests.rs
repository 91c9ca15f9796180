use super::*;
use std::fs;
use std::path::Path;
use test_support::{MirrorFixture, assert_same_tree};

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = run(
        std::iter::once("dirmirror").chain(args.iter().copied()),
        &mut stdout,
        &mut stderr,
    );
    (
        status,
        String::from_utf8(stdout).expect("utf8 stdout"),
        String::from_utf8(stderr).expect("utf8 stderr"),
    )
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

#[test]
fn help_goes_to_stdout() {
    let (status, stdout, stderr) = run_cli(&["--help"]);
    assert_eq!(status, 0);
    assert!(stdout.contains("Usage: dirmirror"));
    assert!(stdout.contains("<interval_seconds>"));
    assert!(stderr.is_empty());
}

#[test]
fn version_reports_package_version() {
    let (status, stdout, _) = run_cli(&["--version"]);
    assert_eq!(status, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_arguments_are_usage_errors() {
    let (status, stdout, stderr) = run_cli(&["only-source"]);
    assert_eq!(status, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("required"));
}

#[test]
fn invalid_intervals_exit_with_syntax_error() {
    for interval in ["0", "-1", "soon", "2.5"] {
        let (status, _, stderr) = run_cli(&["src", "dst", interval, "sync.log"]);
        assert_eq!(status, ExitCode::Syntax.as_i32(), "interval {interval}");
        assert!(stderr.starts_with("dirmirror: invalid interval"), "{stderr}");
    }
}

#[test]
fn invalid_interval_touches_nothing() {
    let fixture = MirrorFixture::new();
    let log = fixture.base().join("sync.log");
    let missing = fixture.base().join("not-created");
    let (status, _, _) = run_cli(&[
        path_arg(fixture.source()),
        path_arg(&missing),
        "0",
        path_arg(&log),
    ]);
    assert_eq!(status, 1);
    assert!(!log.exists());
    assert!(!missing.exists());
}

#[test]
fn once_mirrors_and_logs_to_file_and_stdout() {
    let fixture = MirrorFixture::new();
    fixture.write_source(&[("a.txt", "x"), ("sub/b.txt", "y")]);
    fixture.write_replica(&[("old/x.txt", "stale")]);
    let log = fixture.base().join("sync.log");

    let (status, stdout, stderr) = run_cli(&[
        "--once",
        path_arg(fixture.source()),
        path_arg(fixture.replica()),
        "60",
        path_arg(&log),
    ]);

    assert_eq!(status, 0, "stderr: {stderr}");
    assert_same_tree(fixture.source(), fixture.replica());
    let logged = fs::read_to_string(&log).expect("read log");
    assert_eq!(logged, stdout);

    let lines: Vec<&str> = logged.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().any(|line| line.contains("[WARNING]: Removed folder: ")));
    assert!(lines[4].ends_with("[INFO]: Synchronization complete."));
}

#[test]
fn quiet_keeps_console_silent_but_logs_to_file() {
    let fixture = MirrorFixture::new();
    fixture.write_source(&[("a.txt", "x")]);
    let log = fixture.base().join("sync.log");

    let (status, stdout, _) = run_cli(&[
        "--once",
        "-q",
        path_arg(fixture.source()),
        path_arg(fixture.replica()),
        "1",
        path_arg(&log),
    ]);

    assert_eq!(status, 0);
    assert!(stdout.is_empty());
    assert_eq!(fs::read_to_string(&log).expect("read log").lines().count(), 2);
}

#[test]
fn log_file_is_appended_across_runs() {
    let fixture = MirrorFixture::new();
    let log = fixture.base().join("sync.log");
    fs::write(&log, "previous run\n").expect("seed log");
    let args = [
        "--once",
        "-q",
        path_arg(fixture.source()),
        path_arg(fixture.replica()),
        "1",
        path_arg(&log),
    ];

    assert_eq!(run_cli(&args).0, 0);
    assert_eq!(run_cli(&args).0, 0);

    let logged = fs::read_to_string(&log).expect("read log");
    let lines: Vec<&str> = logged.lines().collect();
    assert_eq!(lines[0], "previous run");
    assert_eq!(lines.len(), 3);
}

#[test]
fn unopenable_log_file_exits_with_file_io_error() {
    let fixture = MirrorFixture::new();
    let (status, _, stderr) = run_cli(&[
        "--once",
        path_arg(fixture.source()),
        path_arg(fixture.replica()),
        "1",
        path_arg(fixture.base()),
    ]);
    assert_eq!(status, ExitCode::FileIo.as_i32());
    assert!(stderr.starts_with("dirmirror: cannot open log file"));
}

#[test]
fn unusable_source_root_in_once_mode_is_a_file_selection_error() {
    let fixture = MirrorFixture::new();
    let source = fixture.base().join("plain-file");
    fs::write(&source, "not a directory").expect("write");
    let log = fixture.base().join("sync.log");

    let (status, stdout, _) = run_cli(&[
        "--once",
        path_arg(&source),
        path_arg(fixture.replica()),
        "1",
        path_arg(&log),
    ]);

    assert_eq!(status, ExitCode::FileSelect.as_i32());
    assert!(stdout.contains("[ERROR]: source path"));
}

#[cfg(unix)]
#[test]
fn entry_failures_in_once_mode_are_partial_transfers() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = MirrorFixture::new();
    fixture.write_source(&[("ok.txt", "fine"), ("locked.txt", "secret")]);
    let locked = fixture.source().join("locked.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
    if fs::File::open(&locked).is_ok() {
        return;
    }
    let log = fixture.base().join("sync.log");

    let (status, stdout, _) = run_cli(&[
        "--once",
        path_arg(fixture.source()),
        path_arg(fixture.replica()),
        "1",
        path_arg(&log),
    ]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).expect("restore");

    assert_eq!(status, ExitCode::PartialTransfer.as_i32());
    assert!(stdout.contains("[ERROR]: failed to open"));
    assert!(fixture.replica().join("ok.txt").exists());
}

#[test]
fn exit_code_from_clamps_to_process_range() {
    assert_eq!(exit_code_from(0), std::process::ExitCode::SUCCESS);
    assert_eq!(exit_code_from(300), std::process::ExitCode::from(255));
    assert_eq!(exit_code_from(-4), std::process::ExitCode::from(0));
}
