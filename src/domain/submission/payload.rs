//! SheetPayload - the flat record handed to the submission sink.

use serde::{Deserialize, Serialize};

/// Flat submission record.
///
/// Field names serialize in camelCase to match the spreadsheet columns.
/// Columns a variant does not collect are sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetPayload {
    pub timestamp: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub breathing_rhythm_type: String,
    pub inhale_type: String,
    pub exhale_type: String,
    pub custom_type_label: String,
    pub raw_scores_json: String,
    pub quiz_title: String,
    pub quiz_description: String,
    pub phone_number: String,
    pub session_interest: String,
    pub referral_source: String,
    pub notes: String,
    pub admin_email_body: String,
    pub quiz_type: String,
    pub being_score: u32,
    pub flowing_score: u32,
    pub trusting_score: u32,
}

impl SheetPayload {
    /// Display name for log lines and email subjects; empty for anonymous
    /// quiz submissions.
    pub fn respondent_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}
