use filetime::FileTime;
use std::fs;

/// Returns `true` when `destination` looks identical to `source` by size and
/// modification time.
///
/// This is the quick check rsync performs before deciding whether a file
/// needs to be transferred. Contents are not read, so a file rewritten with
/// the same size and a restored timestamp is reported as unchanged.
#[must_use]
pub fn quick_check_matches(source: &fs::Metadata, destination: &fs::Metadata) -> bool {
    destination.is_file()
        && source.len() == destination.len()
        && FileTime::from_last_modification_time(source)
            == FileTime::from_last_modification_time(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::set_file_mtime;
    use tempfile::tempdir;

    #[test]
    fn same_size_and_mtime_match() {
        let temp = tempdir().expect("tempdir");
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::write(&a, b"hello").expect("write a");
        fs::write(&b, b"world").expect("write b");
        let when = FileTime::from_unix_time(1_700_000_000, 5);
        set_file_mtime(&a, when).expect("mtime a");
        set_file_mtime(&b, when).expect("mtime b");

        let a_meta = fs::metadata(&a).expect("meta a");
        let b_meta = fs::metadata(&b).expect("meta b");
        assert!(quick_check_matches(&a_meta, &b_meta));
    }

    #[test]
    fn size_difference_fails_check() {
        let temp = tempdir().expect("tempdir");
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::write(&a, b"hello").expect("write a");
        fs::write(&b, b"hello!").expect("write b");
        let when = FileTime::from_unix_time(1_700_000_000, 0);
        set_file_mtime(&a, when).expect("mtime a");
        set_file_mtime(&b, when).expect("mtime b");

        let a_meta = fs::metadata(&a).expect("meta a");
        let b_meta = fs::metadata(&b).expect("meta b");
        assert!(!quick_check_matches(&a_meta, &b_meta));
    }

    #[test]
    fn mtime_difference_fails_check() {
        let temp = tempdir().expect("tempdir");
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::write(&a, b"hello").expect("write a");
        fs::write(&b, b"hello").expect("write b");
        set_file_mtime(&a, FileTime::from_unix_time(1_700_000_000, 0)).expect("mtime a");
        set_file_mtime(&b, FileTime::from_unix_time(1_700_000_001, 0)).expect("mtime b");

        let a_meta = fs::metadata(&a).expect("meta a");
        let b_meta = fs::metadata(&b).expect("meta b");
        assert!(!quick_check_matches(&a_meta, &b_meta));
    }

    #[test]
    fn directory_destination_never_matches() {
        let temp = tempdir().expect("tempdir");
        let a = temp.path().join("a");
        let dir = temp.path().join("dir");
        fs::write(&a, b"").expect("write a");
        fs::create_dir(&dir).expect("dir");

        let a_meta = fs::metadata(&a).expect("meta a");
        let dir_meta = fs::metadata(&dir).expect("meta dir");
        assert!(!quick_check_matches(&a_meta, &dir_meta));
    }
}
