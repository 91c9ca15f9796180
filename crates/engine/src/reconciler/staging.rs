use crate::error::EntryError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_STAGING_ID: AtomicUsize = AtomicUsize::new(0);

/// Hidden sibling file that receives copied bytes before being renamed over
/// the destination.
///
/// Writing beside the destination keeps the final rename on one filesystem and
/// replaces read-only replica files without touching their permissions. An
/// uncommitted staging file is removed on drop.
pub(crate) struct StagedFile {
    final_path: PathBuf,
    staging_path: PathBuf,
    committed: bool,
}

impl StagedFile {
    pub(crate) fn create(destination: &Path) -> Result<(Self, fs::File), EntryError> {
        loop {
            let unique = NEXT_STAGING_ID.fetch_add(1, Ordering::Relaxed);
            let staging_path = staging_path_for(destination, unique);
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&staging_path)
            {
                Ok(file) => {
                    return Ok((
                        Self {
                            final_path: destination.to_path_buf(),
                            staging_path,
                            committed: false,
                        },
                        file,
                    ));
                }
                Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {}
                Err(error) => {
                    return Err(EntryError::io("create staging file", staging_path, error));
                }
            }
        }
    }

    pub(crate) fn staging_path(&self) -> &Path {
        &self.staging_path
    }

    pub(crate) fn commit(mut self) -> Result<(), EntryError> {
        match fs::rename(&self.staging_path, &self.final_path) {
            Ok(()) => {}
            Err(error)
                if matches!(
                    error.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                remove_existing_file(&self.final_path)?;
                fs::rename(&self.staging_path, &self.final_path).map_err(|rename_error| {
                    EntryError::io("replace file", self.final_path.clone(), rename_error)
                })?;
            }
            Err(error) => {
                return Err(EntryError::io("replace file", self.final_path.clone(), error));
            }
        }
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.staging_path);
        }
    }
}

fn remove_existing_file(path: &Path) -> Result<(), EntryError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(EntryError::io("remove existing file", path, error)),
    }
}

fn staging_path_for(destination: &Path, unique: usize) -> PathBuf {
    let file_name = destination
        .file_name()
        .map_or_else(|| "file".into(), |name| name.to_string_lossy());
    destination.with_file_name(format!(
        ".dirmirror-tmp-{file_name}-{}-{unique}",
        process::id()
    ))
}
