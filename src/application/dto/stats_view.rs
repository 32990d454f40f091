//! Dashboard view formatting.

use serde::{Deserialize, Serialize};

use crate::domain::entities::DashboardStats;

/// Stats pre-formatted the way the dashboard renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    /// Recent score, e.g. `"75%"`.
    pub recent_score: String,
    /// Interview count, e.g. `"12"`.
    pub interviews_taken: String,
    /// Average response time, e.g. `"45s"`.
    pub avg_response_time: String,
    /// Progress bar fill percentage.
    pub progress_pct: u8,
    /// Progress caption, e.g. `"68% Complete - Keep practicing to improve!"`.
    pub progress_text: String,
}

impl From<&DashboardStats> for StatsView {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            recent_score: format!("{}%", stats.recent_score_pct),
            interviews_taken: stats.interviews_taken.to_string(),
            avg_response_time: format!("{}s", stats.avg_response_secs),
            progress_pct: stats.overall_progress_pct,
            progress_text: format!(
                "{}% Complete - Keep practicing to improve!",
                stats.overall_progress_pct
            ),
        }
    }
}
