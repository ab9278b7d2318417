/// Pipeline behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardOptions {
    /// Leave multi-job MAWB rows unexpanded instead of fanning out one row
    /// per job number. Suppressing the fan-out breaks the one-job-per-row
    /// contract of the join key, so enabling this is surfaced as a warning.
    pub consolidate: bool,
}

impl BoardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_consolidate(mut self, consolidate: bool) -> Self {
        self.consolidate = consolidate;
        self
    }
}
