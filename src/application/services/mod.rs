//! Application services.

mod avatar_editor;
mod dashboard;
mod interview_setup;

pub use avatar_editor::{AvatarEditor, BusyFlag};
pub use dashboard::DashboardService;
pub use interview_setup::InterviewSetup;
