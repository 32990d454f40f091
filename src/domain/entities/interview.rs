//! Interview configuration entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interview target role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Role {
    SoftwareDeveloper,
    FrontendDeveloper,
    BackendDeveloper,
    DataAnalyst,
    FullStackDeveloper,
    DevOpsEngineer,
}

impl Role {
    /// All selectable roles, in display order.
    pub const ALL: [Self; 6] = [
        Self::SoftwareDeveloper,
        Self::FrontendDeveloper,
        Self::BackendDeveloper,
        Self::DataAnalyst,
        Self::FullStackDeveloper,
        Self::DevOpsEngineer,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SoftwareDeveloper => "Software Developer",
            Self::FrontendDeveloper => "Frontend Developer",
            Self::BackendDeveloper => "Backend Developer",
            Self::DataAnalyst => "Data Analyst",
            Self::FullStackDeveloper => "Full Stack Developer",
            Self::DevOpsEngineer => "DevOps Engineer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Interview mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum InterviewMode {
    Technical,
    Hr,
}

impl InterviewMode {
    /// All selectable modes, in display order.
    pub const ALL: [Self; 2] = [Self::Technical, Self::Hr];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Hr => "HR",
        }
    }
}

impl std::fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Interview difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All selectable difficulties, in display order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A running interview, produced by a completed setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSession {
    role: Role,
    mode: InterviewMode,
    difficulty: Difficulty,
    started_at: DateTime<Utc>,
}

impl InterviewSession {
    /// Starts a session with the given configuration, stamped now.
    #[must_use]
    pub fn begin(role: Role, mode: InterviewMode, difficulty: Difficulty) -> Self {
        Self {
            role,
            mode,
            difficulty,
            started_at: Utc::now(),
        }
    }

    /// Returns the chosen role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the chosen mode.
    #[must_use]
    pub const fn mode(&self) -> InterviewMode {
        self.mode
    }

    /// Returns the chosen difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
