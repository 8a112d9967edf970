//! Display domain models.

use serde::{Deserialize, Serialize};

/// Visual weight of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Returns the string representation of this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Neutral => "NEUTRAL",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Danger => "DANGER",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a status lookup.
///
/// Unrecognized statuses are a first-class outcome, not an error: some
/// sub-domains (complaints, warranties) carry statuses outside the project
/// taxonomy, and the portal echoes them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum StatusLabel {
    Known { label: String, severity: Severity },
    Unknown { raw: String },
}

impl StatusLabel {
    pub(crate) fn known(label: &str, severity: Severity) -> Self {
        StatusLabel::Known {
            label: label.to_string(),
            severity,
        }
    }

    /// The text to render on the badge.
    pub fn text(&self) -> &str {
        match self {
            StatusLabel::Known { label, .. } => label,
            StatusLabel::Unknown { raw } => raw,
        }
    }

    /// The badge severity; unknown statuses render as neutral.
    pub fn severity(&self) -> Severity {
        match self {
            StatusLabel::Known { severity, .. } => *severity,
            StatusLabel::Unknown { .. } => Severity::Neutral,
        }
    }
}
