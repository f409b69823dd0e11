/// Change detection against the last delivered report
///
/// Holds an owned copy of the last report that actually reached the chat.
/// Checking is side-effect free; only [`ChangeDetector::record_sent`]
/// moves the baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeDetector {
    previous: String,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `report` differs from the last delivered report
    pub fn is_changed(&self, report: &str) -> bool {
        self.previous != report
    }

    /// Marks `report` as delivered
    pub fn record_sent(&mut self, report: &str) {
        self.previous = report.to_owned();
    }

    /// The last delivered report, empty before the first delivery
    pub fn previous(&self) -> &str {
        &self.previous
    }
}
