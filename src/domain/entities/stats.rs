//! Dashboard statistics entity.

use serde::{Deserialize, Serialize};

/// Performance snapshot shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Score of the most recent interview, in percent.
    pub recent_score_pct: u8,
    /// Total interviews taken.
    pub interviews_taken: u32,
    /// Average response time in seconds.
    pub avg_response_secs: u32,
    /// Overall progress, in percent.
    pub overall_progress_pct: u8,
}

impl DashboardStats {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(
        recent_score_pct: u8,
        interviews_taken: u32,
        avg_response_secs: u32,
        overall_progress_pct: u8,
    ) -> Self {
        Self {
            recent_score_pct,
            interviews_taken,
            avg_response_secs,
            overall_progress_pct,
        }
    }
}
