//! Submission routing configuration

use serde::Deserialize;

/// Where finished submissions go.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMode {
    /// Log only; nothing leaves the process.
    #[default]
    Log,
    Sheet,
    Email,
    SheetAndEmail,
}

impl SubmissionMode {
    pub fn uses_sheet(&self) -> bool {
        matches!(self, SubmissionMode::Sheet | SubmissionMode::SheetAndEmail)
    }

    pub fn uses_email(&self) -> bool {
        matches!(self, SubmissionMode::Email | SubmissionMode::SheetAndEmail)
    }
}

/// Submission configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub mode: SubmissionMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_log() {
        assert_eq!(SubmissionConfig::default().mode, SubmissionMode::Log);
    }

    #[test]
    fn mode_routes_to_transports() {
        assert!(!SubmissionMode::Log.uses_sheet());
        assert!(!SubmissionMode::Log.uses_email());
        assert!(SubmissionMode::Sheet.uses_sheet());
        assert!(!SubmissionMode::Sheet.uses_email());
        assert!(SubmissionMode::Email.uses_email());
        assert!(SubmissionMode::SheetAndEmail.uses_sheet());
        assert!(SubmissionMode::SheetAndEmail.uses_email());
    }
}
