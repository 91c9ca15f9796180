/// Options that control metadata preservation when a file is mirrored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MetadataOptions {
    preserve_permissions: bool,
    preserve_times: bool,
}

impl MetadataOptions {
    /// Creates a new [`MetadataOptions`] value with defaults applied.
    ///
    /// By default both permission bits and timestamps are preserved.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            preserve_permissions: true,
            preserve_times: true,
        }
    }

    /// Requests that permissions be preserved when applying metadata.
    #[must_use]
    pub const fn preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Requests that timestamps be preserved when applying metadata.
    #[must_use]
    pub const fn preserve_times(mut self, preserve: bool) -> Self {
        self.preserve_times = preserve;
        self
    }

    /// Reports whether permissions should be preserved.
    #[must_use]
    pub const fn permissions(&self) -> bool {
        self.preserve_permissions
    }

    /// Reports whether timestamps should be preserved.
    #[must_use]
    pub const fn times(&self) -> bool {
        self.preserve_times
    }
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self::new()
    }
}
