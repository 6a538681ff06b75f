use crate::storage::FreezeWindow;

impl FreezeWindow {
    pub fn new(launch_ts: u64, freeze_duration: u64) -> Self {
        FreezeWindow {
            launch_ts,
            freeze_duration,
            manual: false,
            lapsed: freeze_duration == 0,
        }
    }

    pub fn ends_at(&self) -> u64 {
        self.launch_ts.saturating_add(self.freeze_duration)
    }

    /// An automatic window that is over counts as unfrozen even before it is persisted
    pub fn is_frozen(&self, now: u64) -> bool {
        self.manual || (!self.lapsed && now < self.ends_at())
    }

    /// Marks the automatic window as over once its time has passed. Returns true on change.
    pub fn lapse_if_due(&mut self, now: u64) -> bool {
        if self.lapsed || now < self.ends_at() {
            return false;
        }
        self.lapsed = true;
        true
    }
}
