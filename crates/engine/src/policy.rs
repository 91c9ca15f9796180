/// Decides whether a source file is copied when its replica already exists.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CopyPolicy {
    /// Copy every file on every pass.
    #[default]
    Always,
    /// Skip files whose replica has the same size and modification time.
    QuickCheck,
}

impl CopyPolicy {
    /// Reports whether unchanged files may be skipped.
    #[must_use]
    pub const fn skips_unchanged(self) -> bool {
        matches!(self, Self::QuickCheck)
    }
}
