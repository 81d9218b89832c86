use std::time::Duration;

use uuid::Uuid;

/// Final accounting for one benchmark run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Correlation id for this run, also carried in the run's log records.
    pub run_id: Uuid,
    /// Total submissions issued, warmup included.
    pub submissions: u64,
    /// Operations that settled with a success status.
    pub processed: u64,
    /// Wall time from first submission to the last drained completion.
    pub elapsed: Duration,
}

impl RunSummary {
    /// Sustained throughput in operations per whole elapsed second.
    ///
    /// Uses floor division over whole seconds, matching how the measurement
    /// is conventionally reported. A run shorter than one second reports 0
    /// rather than dividing by zero.
    pub fn throughput(&self) -> u64 {
        let secs = self.elapsed.as_secs();
        if secs == 0 { 0 } else { self.processed / secs }
    }
}
