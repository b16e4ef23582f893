/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub resolved: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Share of resolved questions, 0-100.
    #[must_use]
    pub fn percent_resolved(&self) -> u32 {
        quiz_core::model::score_percentage(self.resolved, self.total)
    }
}
