//! Display state for the egui UI.

/// Visual tone of the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

impl StatusTone {
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Busy => "Working",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    pub tone: StatusTone,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Connecting to the classifier…".into(),
            tone: StatusTone::Idle,
        }
    }
}

/// Where the schema fetch stands for this session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaStatus {
    Loading,
    Ready,
    /// Terminal until the user reloads; carries the message to show.
    Failed(String),
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub schema: SchemaStatus,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            schema: SchemaStatus::Loading,
        }
    }
}
