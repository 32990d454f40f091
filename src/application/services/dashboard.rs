//! Dashboard service.

use crate::domain::entities::DashboardStats;

/// Supplies the stats snapshot shown on the dashboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardService;

impl DashboardService {
    /// Creates the service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Current stats snapshot.
    ///
    /// TODO: replace the fixed numbers with real aggregates once the
    /// interview-results backend exists.
    #[must_use]
    pub const fn stats(&self) -> DashboardStats {
        DashboardStats::new(75, 12, 45, 68)
    }
}
