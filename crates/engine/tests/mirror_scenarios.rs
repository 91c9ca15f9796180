// End-to-end passes over scratch trees.
//
// Each test builds a source and a replica tree, runs one or more passes and
// compares the trees and the reported log messages.

use engine::{CopyPolicy, Reconciler, Roots};
use logging_sink::{MemorySink, Severity};
use std::fs;
use std::path::PathBuf;
use test_support::{MirrorFixture, assert_same_tree, snapshot};

fn reconciler(fixture: &MirrorFixture) -> Reconciler {
    Reconciler::new(Roots::new(fixture.source(), fixture.replica()))
}

// ==================== Scenarios ====================

#[test]
fn fresh_replica_receives_nested_files() {
    let fixture = MirrorFixture::new();
    fixture.write_source(&[("a.txt", "x"), ("sub/b.txt", "y"), ("sub/c.txt", "z")]);

    let mut sink = MemorySink::new();
    let summary = reconciler(&fixture).run_pass(&mut sink);

    fixture.assert_mirrored();
    assert_eq!(summary.folders_created(), 1);
    assert_eq!(summary.files_copied(), 3);

    let replica = fixture.replica();
    let source = fixture.source();
    let info = sink.messages_at(Severity::Info);
    assert_eq!(info.len(), 4);
    assert!(info.contains(&format!("Created folder: {}", replica.join("sub").display()).as_str()));
    for name in ["a.txt", "sub/b.txt", "sub/c.txt"] {
        let expected = format!(
            "Copied: {} to {}",
            source.join(name).display(),
            replica.join(name).display()
        );
        assert!(info.contains(&expected.as_str()), "missing {expected}");
    }
    assert!(sink.messages_at(Severity::Warning).is_empty());
}

#[test]
fn source_edits_between_passes_are_tracked() {
    let fixture = MirrorFixture::new();
    fixture.write_source(&[("a.txt", "hello"), ("sub/b.txt", "world")]);
    let reconciler = reconciler(&fixture);
    let mut sink = MemorySink::new();

    reconciler.run_pass(&mut sink);
    fixture.assert_mirrored();

    fs::remove_file(fixture.source().join("a.txt")).expect("remove a.txt");
    fixture.write_source(&[("sub/c.txt", "new")]);
    let summary = reconciler.run_pass(&mut sink);

    let replica = fixture.replica();
    assert!(!replica.join("a.txt").exists());
    assert_eq!(fs::read_to_string(replica.join("sub/b.txt")).expect("b"), "world");
    assert_eq!(fs::read_to_string(replica.join("sub/c.txt")).expect("c"), "new");
    assert_eq!(summary.files_removed(), 1);
    fixture.assert_mirrored();
}

#[test]
fn stale_replica_folder_is_removed() {
    let fixture = MirrorFixture::new();
    fixture.write_source(&[("keep.txt", "k")]);
    fixture.write_replica(&[("keep.txt", "k"), ("old/x.txt", "x")]);

    let mut sink = MemorySink::new();
    let summary = reconciler(&fixture).run_pass(&mut sink);

    fixture.assert_mirrored();
    assert_eq!(summary.files_copied(), 1);
    assert_eq!(summary.folders_removed(), 1);
    assert_eq!(
        sink.messages_at(Severity::Warning),
        vec![format!("Removed folder: {}", fixture.replica().join("old").display()).as_str()]
    );
}

// ==================== Properties ====================

#[test]
fn second_pass_changes_no_structure() {
    let fixture = MirrorFixture::new();
    fixture.write_source(&[("a.txt", "1"), ("d/e/f.txt", "2"), ("empty/", "")]);
    fixture.write_replica(&[("gone.txt", "g")]);
    let reconciler = reconciler(&fixture);

    let mut sink = MemorySink::new();
    reconciler.run_pass(&mut sink);
    let after_first = snapshot(fixture.replica());

    sink.clear();
    let second = reconciler.run_pass(&mut sink);

    assert_eq!(snapshot(fixture.replica()), after_first);
    assert_eq!(second.folders_created(), 0);
    assert_eq!(second.folders_removed(), 0);
    assert_eq!(second.files_removed(), 0);
    assert_eq!(second.files_copied(), 2);
    assert!(sink.messages().iter().all(|message| message.starts_with("Copied: ")));
}

#[test]
fn source_deletions_reach_the_replica() {
    let fixture = MirrorFixture::new();
    fixture.write_source(&[("a.txt", "a"), ("dir/b.txt", "b"), ("dir/c.txt", "c")]);
    let reconciler = reconciler(&fixture);
    let mut sink = MemorySink::new();
    reconciler.run_pass(&mut sink);

    fs::remove_file(fixture.source().join("dir/b.txt")).expect("remove b");
    fs::remove_file(fixture.source().join("a.txt")).expect("remove a");

    sink.clear();
    let summary = reconciler.run_pass(&mut sink);

    fixture.assert_mirrored();
    assert_eq!(summary.files_removed(), 2);
}

#[test]
fn deeply_nested_additions_reach_the_replica() {
    let fixture = MirrorFixture::new();
    let reconciler = reconciler(&fixture);
    let mut sink = MemorySink::new();
    reconciler.run_pass(&mut sink);

    fixture.write_source(&[("l1/l2/l3/l4/l5/leaf.txt", "leaf")]);
    let summary = reconciler.run_pass(&mut sink);

    fixture.assert_mirrored();
    assert_eq!(summary.folders_created(), 5);
    assert_eq!(summary.files_copied(), 1);
}

#[test]
fn modified_source_content_overwrites_replica() {
    let fixture = MirrorFixture::new();
    fixture.write_source(&[("a.txt", "first")]);
    let reconciler = reconciler(&fixture);
    let mut sink = MemorySink::new();
    reconciler.run_pass(&mut sink);

    fs::write(fixture.source().join("a.txt"), "second version").expect("rewrite");
    reconciler.run_pass(&mut sink);

    assert_eq!(
        fs::read_to_string(fixture.replica().join("a.txt")).expect("read"),
        "second version"
    );
}

#[test]
fn quick_check_reaches_the_same_replica_state() {
    let unconditional = MirrorFixture::new();
    let quick = MirrorFixture::new();
    let tree = [
        ("a.txt", "alpha"),
        ("nested/b.txt", "beta"),
        ("nested/deeper/c.txt", "gamma"),
        ("blank/", ""),
    ];
    let stale = [("nested/stale.txt", "s"), ("orphan/o.txt", "o")];
    for fixture in [&unconditional, &quick] {
        fixture.write_source(&tree);
        fixture.write_replica(&stale);
        fixture.write_replica(&[("a.txt", "outdated")]);
    }

    let mut sink = MemorySink::new();
    reconciler(&unconditional).run_pass(&mut sink);
    let quick_summary = reconciler(&quick)
        .copy_policy(CopyPolicy::QuickCheck)
        .run_pass(&mut sink);

    unconditional.assert_mirrored();
    quick.assert_mirrored();
    assert_same_tree(unconditional.replica(), quick.replica());
    assert_eq!(quick_summary.files_copied(), 3);
}

#[test]
fn replica_never_holds_staging_files() {
    let fixture = MirrorFixture::new();
    fixture.write_source(&[("a.txt", "a"), ("sub/b.txt", "b")]);
    let mut sink = MemorySink::new();
    reconciler(&fixture).run_pass(&mut sink);

    let leftovers: Vec<PathBuf> = snapshot(fixture.replica())
        .into_keys()
        .filter(|path| path.to_string_lossy().contains(".dirmirror-tmp-"))
        .collect();
    assert!(leftovers.is_empty(), "leftover staging files: {leftovers:?}");
}
