//! PayloadBuilder - assembles the submission payload.

use super::{build_admin_summary, SheetPayload};
use crate::domain::form::{fields::*, FormState, FormVariant};
use crate::domain::foundation::Timestamp;
use crate::domain::quiz::QuizResults;

/// Pure assembly of a [`SheetPayload`] from a finished session.
pub struct PayloadBuilder;

impl PayloadBuilder {
    /// Builds the payload for `variant`.
    ///
    /// The standalone quiz sends scores and answers only; the application
    /// also fills contact columns, the referral source, and the admin
    /// summary.
    pub fn build(
        variant: FormVariant,
        form: &FormState,
        results: &QuizResults,
        submitted_at: Timestamp,
    ) -> SheetPayload {
        let tally = results.tally();
        let raw_scores_json =
            serde_json::to_string(&results.records).unwrap_or_else(|_| String::from("[]"));

        let mut payload = SheetPayload {
            timestamp: submitted_at.to_iso_string(),
            raw_scores_json,
            quiz_title: variant.quiz_title().to_string(),
            quiz_description: variant.quiz_description().to_string(),
            quiz_type: variant.quiz_type().to_string(),
            being_score: tally.being,
            flowing_score: tally.flowing,
            trusting_score: tally.trusting,
            ..SheetPayload::default()
        };

        if variant == FormVariant::Application {
            payload.first_name = form.text(FIRST_NAME).to_string();
            payload.last_name = form.text(LAST_NAME).to_string();
            payload.email = form.text(CONTACT_EMAIL).to_string();
            payload.phone_number = form.text(PHONE_NUMBER).to_string();
            if form.choice(REFERRED) == Some("yes") {
                payload.referral_source = form.text(REFERRER_NAME).to_string();
            }
            payload.admin_email_body = build_admin_summary(form, results);
        }

        payload
    }
}
