//! Interview setup service.

use tracing::{debug, info};

use crate::domain::entities::{Difficulty, InterviewMode, InterviewSession, Role};
use crate::domain::errors::SetupError;
use crate::domain::ports::FullscreenPort;

/// Single-select interview configuration.
///
/// Mirrors the setup screen: each of role, mode and difficulty holds at
/// most one choice, and starting is refused until all three are made.
#[derive(Debug, Default, Clone)]
pub struct InterviewSetup {
    role: Option<Role>,
    mode: Option<InterviewMode>,
    difficulty: Option<Difficulty>,
}

impl InterviewSetup {
    /// Creates an empty setup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the role, replacing any prior choice.
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    /// Selects the mode, replacing any prior choice.
    pub fn select_mode(&mut self, mode: InterviewMode) {
        self.mode = Some(mode);
    }

    /// Selects the difficulty, replacing any prior choice.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
    }

    /// Current role choice.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// Current mode choice.
    #[must_use]
    pub const fn mode(&self) -> Option<InterviewMode> {
        self.mode
    }

    /// Current difficulty choice.
    #[must_use]
    pub const fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Returns whether all three selections are made.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.role.is_some() && self.mode.is_some() && self.difficulty.is_some()
    }

    /// Names of the selections still missing, in display order.
    #[must_use]
    pub fn missing_selections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.role.is_none() {
            missing.push("a role");
        }
        if self.mode.is_none() {
            missing.push("a mode");
        }
        if self.difficulty.is_none() {
            missing.push("a difficulty");
        }
        missing
    }

    /// Starts the interview.
    ///
    /// Refuses while incomplete without touching the fullscreen surface;
    /// otherwise requests fullscreen and, once granted, returns the
    /// session.
    ///
    /// # Errors
    /// Returns [`SetupError::IncompleteSelection`] or
    /// [`SetupError::FullscreenDenied`].
    pub fn start(&self, fullscreen: &dyn FullscreenPort) -> Result<InterviewSession, SetupError> {
        let (Some(role), Some(mode), Some(difficulty)) = (self.role, self.mode, self.difficulty)
        else {
            debug!("start refused, setup incomplete");
            return Err(SetupError::incomplete(self.missing_selections().join(", ")));
        };

        fullscreen.enter()?;

        info!(role = %role, mode = %mode, difficulty = %difficulty, "interview started");
        Ok(InterviewSession::begin(role, mode, difficulty))
    }
}
