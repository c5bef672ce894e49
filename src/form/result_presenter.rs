//! Display attributes derived from a prediction outcome.

use super::prediction::PredictionOutcome;

/// Class code the model uses for edible mushrooms.
pub const EDIBLE_CODE: &str = "e";
/// Class code the model uses for poisonous mushrooms.
pub const POISONOUS_CODE: &str = "p";

const NO_RESULT_TITLE: &str = "No result yet";
const RESULT_NOTE: &str = "This is a prediction. Do not rely on it to decide whether a mushroom is safe to eat.";
const NO_RESULT_NOTE: &str = "Fill in every feature and press Predict to see a result.";

/// Severity class of the result badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Good,
    Bad,
    Warn,
}

impl Severity {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Warn => "warn",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultIcon {
    Neutral,
    Check,
    Skull,
    Warning,
}

impl ResultIcon {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Neutral => "🧫",
            Self::Check => "✅",
            Self::Skull => "☠",
            Self::Warning => "⚠",
        }
    }
}

/// What the result panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub icon: ResultIcon,
    pub severity: Severity,
    pub title: String,
    /// Confidence as a percentage; `None` hides the confidence line.
    pub confidence: Option<String>,
    pub note: &'static str,
}

/// Map the latest outcome to display attributes.
///
/// Failures render like "no result"; their message is shown by the status area.
pub fn present(outcome: Option<&PredictionOutcome>) -> ResultView {
    let Some(prediction) = outcome.and_then(PredictionOutcome::prediction) else {
        return ResultView {
            icon: ResultIcon::Neutral,
            severity: Severity::Warn,
            title: NO_RESULT_TITLE.to_string(),
            confidence: None,
            note: NO_RESULT_NOTE,
        };
    };
    let (icon, severity) = match prediction.class_code.as_str() {
        EDIBLE_CODE => (ResultIcon::Check, Severity::Good),
        POISONOUS_CODE => (ResultIcon::Skull, Severity::Bad),
        _ => (ResultIcon::Warning, Severity::Warn),
    };
    ResultView {
        icon,
        severity,
        title: format!("{} ({})", prediction.label, prediction.class_code),
        confidence: prediction
            .confidence
            .filter(|value| value.is_finite())
            .map(format_confidence),
        note: RESULT_NOTE,
    }
}

/// Format a 0..1 confidence as a percentage with two decimals.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}
