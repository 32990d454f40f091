//! Application layer with services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Service implementations.
pub mod services;

pub use dto::StatsView;
pub use services::{AvatarEditor, BusyFlag, DashboardService, InterviewSetup};
