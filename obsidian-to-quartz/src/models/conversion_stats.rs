// src/models/conversion_stats.rs

/// Outcome counters for one conversion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    pub directories_created: u64,
    pub markdown_processed: u64,
    pub files_copied: u64,
    pub hidden_dirs_skipped: u64,
    pub entries_excluded: u64,
    pub excalidraw_skipped: u64,
}

impl ConversionStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            directories_created: 0,
            markdown_processed: 0,
            files_copied: 0,
            hidden_dirs_skipped: 0,
            entries_excluded: 0,
            excalidraw_skipped: 0,
        }
    }

    /// Files written to the destination, one per progress notification.
    #[inline]
    #[must_use]
    pub const fn files_written(&self) -> u64 {
        self.markdown_processed.saturating_add(self.files_copied)
    }

    /// Entries dropped by any filtering rule.
    #[inline]
    #[must_use]
    pub const fn skipped(&self) -> u64 {
        self.hidden_dirs_skipped
            .saturating_add(self.entries_excluded)
            .saturating_add(self.excalidraw_skipped)
    }
}
