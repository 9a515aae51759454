//! QuizSession aggregate - one user's in-memory run through a form.
//!
//! # Ownership
//!
//! The session exclusively owns its form values, quiz selections, cursor,
//! and derived results. The question bank and profile table are shared
//! read-only constants. Nothing here is persisted; dropping the session
//! discards everything.

use tracing::{debug, info};

use super::SessionError;
use crate::domain::form::{
    validate_all, validate_section, FieldValue, FormState, FormVariant, SectionCursor,
    SectionSchema, ValidationContext,
};
use crate::domain::foundation::{SessionId, SessionStatus, StateMachine, Timestamp};
use crate::domain::quiz::{Category, QuestionBank, QuizAnswers, QuizResults};
use crate::domain::submission::PayloadBuilder;
use crate::ports::SubmissionSink;

/// Session aggregate driving navigation, validation, and submit.
///
/// # Invariants
///
/// - `cursor` always points at a section of `variant`
/// - `results` is `Some` exactly when `status` is `Completed`
/// - `error` holds at most one message, from the most recent failed
///   Next/Submit
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: SessionId,
    variant: FormVariant,
    bank: QuestionBank,
    form: FormState,
    answers: QuizAnswers,
    cursor: SectionCursor,
    status: SessionStatus,
    error: Option<String>,
    results: Option<QuizResults>,
}

impl QuizSession {
    /// Starts a session over the standard question bank.
    pub fn new(variant: FormVariant) -> Self {
        Self::with_bank(variant, QuestionBank::standard())
    }

    /// Starts a session over a custom question bank.
    pub fn with_bank(variant: FormVariant, bank: QuestionBank) -> Self {
        let session = Self {
            id: SessionId::new(),
            variant,
            bank,
            form: FormState::from_sections(variant.sections()),
            answers: QuizAnswers::new(),
            cursor: SectionCursor::new(variant.section_count()),
            status: SessionStatus::Answering,
            error: None,
            results: None,
        };
        debug!(session_id = %session.id, variant = ?variant, "Session started");
        session
    }

    // === Accessors ===

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// 1-based ordinal of the active section.
    pub fn current_section(&self) -> usize {
        self.cursor.current()
    }

    pub fn current_schema(&self) -> &'static SectionSchema {
        &self.variant.sections()[self.cursor.current() - 1]
    }

    /// The message of the last failed Next/Submit, if still showing.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    /// Whether the submit action is offered on the active section.
    pub fn can_submit(&self) -> bool {
        self.variant.submit_from_any_section() || self.cursor.is_last()
    }

    // === Input ===

    /// Selects an option for quiz question `index`.
    ///
    /// Clears the displayed error when the quiz is on the active section.
    pub fn select_answer(&mut self, index: usize, category: Category) -> Result<(), SessionError> {
        self.ensure_mutable()?;
        self.answers.select(&self.bank, index, category)?;
        if self.current_schema().includes_quiz {
            self.error = None;
        }
        Ok(())
    }

    /// Writes a form field.
    pub fn set_field(&mut self, id: &str, value: FieldValue) -> Result<(), SessionError> {
        self.ensure_mutable()?;
        self.form.set(id, value)?;
        self.error = None;
        Ok(())
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), SessionError> {
        self.set_field(id, FieldValue::Text(text.into()))
    }

    pub fn set_flag(&mut self, id: &str, flag: bool) -> Result<(), SessionError> {
        self.set_field(id, FieldValue::Flag(flag))
    }

    pub fn set_choice(&mut self, id: &str, choice: impl Into<String>) -> Result<(), SessionError> {
        self.set_field(id, FieldValue::Choice(Some(choice.into())))
    }

    // === Navigation ===

    /// Validates the active section and moves to the next one.
    ///
    /// On the last section a valid Next leaves the cursor in place.
    ///
    /// # Errors
    ///
    /// `Incomplete` with the section's first unmet requirement; the message
    /// is also kept in [`Self::error`].
    pub fn next(&mut self) -> Result<usize, SessionError> {
        let section = self.cursor.current();
        if let Err(incomplete) = validate_section(section, self.current_schema(), &self.context()) {
            debug!(session_id = %self.id, section, "Section incomplete");
            self.error = Some(incomplete.message.clone());
            return Err(incomplete.into());
        }
        self.error = None;
        let now = self.cursor.advance();
        debug!(session_id = %self.id, from = section, to = now, "Next section");
        Ok(now)
    }

    /// Moves back one section without validating.
    pub fn previous(&mut self) -> usize {
        self.error = None;
        let now = self.cursor.retreat();
        debug!(session_id = %self.id, to = now, "Previous section");
        now
    }

    /// Selects a section directly, skipping validation.
    ///
    /// # Errors
    ///
    /// - `TabsNotSupported` for single-page variants
    /// - `Invalid` if `section` is out of range
    pub fn jump_to(&mut self, section: usize) -> Result<usize, SessionError> {
        if !self.variant.supports_tabs() {
            return Err(SessionError::TabsNotSupported);
        }
        let now = self.cursor.jump_to(section)?;
        self.error = None;
        debug!(session_id = %self.id, to = now, "Jumped to section");
        Ok(now)
    }

    // === Submit ===

    /// Validates every section, scores the quiz, and hands the payload to
    /// `sink`.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if results exist and the session was not reset
    /// - `SubmitNotAvailable` if the active section does not offer submit
    /// - `Incomplete` for the first invalid section; the cursor moves there
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<&QuizResults, SessionError> {
        self.submit_at(sink, Timestamp::now())
    }

    /// [`Self::submit`] with an explicit payload timestamp.
    pub fn submit_at(
        &mut self,
        sink: &dyn SubmissionSink,
        submitted_at: Timestamp,
    ) -> Result<&QuizResults, SessionError> {
        self.ensure_mutable()?;
        if !self.can_submit() {
            return Err(SessionError::SubmitNotAvailable {
                last: self.cursor.count(),
            });
        }

        if let Err(incomplete) = validate_all(self.variant.sections(), &self.context()) {
            debug!(
                session_id = %self.id,
                section = incomplete.section,
                "Submit blocked by incomplete section"
            );
            // Cursor cannot reject an ordinal produced by validate_all.
            let _ = self.cursor.jump_to(incomplete.section);
            self.error = Some(incomplete.message.clone());
            return Err(incomplete.into());
        }

        let results = QuizResults::from_records(self.answers.records(&self.bank));
        let payload = PayloadBuilder::build(self.variant, &self.form, &results, submitted_at);

        info!(
            session_id = %self.id,
            quiz_type = %payload.quiz_type,
            code = %results.code(),
            being = results.tally().being,
            flowing = results.tally().flowing,
            trusting = results.tally().trusting,
            profile_found = results.profile.is_found(),
            "Quiz submitted"
        );
        sink.submit(payload);

        self.status = self.status.transition_to(SessionStatus::Completed)?;
        self.error = None;
        Ok(&*self.results.insert(results))
    }

    /// Retake: restores every field, selection, and the cursor to their
    /// initial state and drops any results.
    pub fn reset(&mut self) {
        self.form = FormState::from_sections(self.variant.sections());
        self.answers.clear();
        self.cursor.reset();
        self.error = None;
        self.results = None;
        self.status = SessionStatus::Answering;
        debug!(session_id = %self.id, "Session reset");
    }

    fn context(&self) -> ValidationContext<'_> {
        ValidationContext {
            form: &self.form,
            answers: &self.answers,
            bank: &self.bank,
        }
    }

    fn ensure_mutable(&self) -> Result<(), SessionError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(SessionError::AlreadyCompleted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::fields::*;
    use crate::domain::submission::SheetPayload;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        payloads: Mutex<Vec<SheetPayload>>,
    }

    impl RecordingSink {
        fn count(&self) -> usize {
            self.payloads.lock().unwrap().len()
        }

        fn last(&self) -> SheetPayload {
            self.payloads.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&self, payload: SheetPayload) {
            self.payloads.lock().unwrap().push(payload);
        }
    }

    fn answer_all(session: &mut QuizSession, category: Category) {
        for idx in 0..session.bank().len() {
            session.select_answer(idx, category).unwrap();
        }
    }

    fn fill_application(session: &mut QuizSession) {
        session.set_flag(METAPHYSICAL_CONSENT, true).unwrap();
        for id in [
            DAMAGING_EXPERIENCE,
            BEFORE_SELF,
            NOW_SELF,
            BOUNDARIES_EXPLANATION,
            HEALED_SELF,
            FAULT_VS_RESPONSIBILITY,
        ] {
            session.set_text(id, "answer").unwrap();
        }
        for id in [HAS_TRUSTED_PERSON, HAS_FIRM_BOUNDARIES, HAS_WEAK_BOUNDARIES, PRIVATE_SPACE] {
            session.set_choice(id, "yes").unwrap();
        }
        answer_all(session, Category::Trusting);
        session.set_choice(READINESS, "steady").unwrap();
        session.set_choice(INVESTMENT_RANGE, "light").unwrap();
        for (id, value) in [
            (FIRST_NAME, "Ada"),
            (LAST_NAME, "Lovelace"),
            (BIRTHDATE, "1815-12-10"),
            (PHONE_NUMBER, "555-0100"),
            (CONTACT_EMAIL, "ada@example.com"),
            (TIME_ZONE, "GMT"),
            (CITY, "London"),
            (STATE, "London"),
            (COUNTRY, "UK"),
            (ZIP_CODE, "N1"),
        ] {
            session.set_text(id, value).unwrap();
        }
        session.set_choice(PRONOUNS, "she/her").unwrap();
        session.set_choice(PREFERRED_CONTACT, "email").unwrap();
        session.set_choice(REFERRED, "no").unwrap();
    }

    #[test]
    fn standalone_submit_with_missing_answer_is_blocked() {
        let sink = RecordingSink::default();
        let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
        for idx in 0..session.bank().len() {
            if idx != 4 {
                session.select_answer(idx, Category::Being).unwrap();
            }
        }

        let err = session.submit(&sink).unwrap_err();
        assert_eq!(err.to_string(), "Please answer all questions before seeing your result.");
        assert_eq!(session.error(), Some("Please answer all questions before seeing your result."));
        assert_eq!(sink.count(), 0);
        assert_eq!(session.status(), SessionStatus::Answering);
    }

    #[test]
    fn selecting_answer_clears_error() {
        let sink = RecordingSink::default();
        let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
        assert!(session.submit(&sink).is_err());
        assert!(session.error().is_some());

        session.select_answer(0, Category::Flowing).unwrap();
        assert!(session.error().is_none());
    }

    #[test]
    fn standalone_submit_scores_and_sends_payload() {
        let sink = RecordingSink::default();
        let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
        answer_all(&mut session, Category::Being);

        let results = session.submit(&sink).unwrap();
        assert_eq!(results.code().to_string(), "Being > Flowing");
        assert!(results.profile.is_found());

        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(sink.count(), 1);
        let payload = sink.last();
        assert_eq!(payload.being_score, 12);
        assert_eq!(payload.quiz_type, "threeContradictions");
    }

    #[test]
    fn second_submit_requires_reset() {
        let sink = RecordingSink::default();
        let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
        answer_all(&mut session, Category::Flowing);
        session.submit(&sink).unwrap();

        assert_eq!(session.submit(&sink).unwrap_err(), SessionError::AlreadyCompleted);
        assert_eq!(
            session.select_answer(0, Category::Being).unwrap_err(),
            SessionError::AlreadyCompleted
        );
        assert_eq!(sink.count(), 1);
    }

    #[test]
    fn reset_restores_initial_state() {
        let sink = RecordingSink::default();
        let mut session = QuizSession::new(FormVariant::Application);
        fill_application(&mut session);
        session.jump_to(5).unwrap();
        session.submit(&sink).unwrap();

        session.reset();
        assert_eq!(session.status(), SessionStatus::Answering);
        assert!(session.results().is_none());
        assert_eq!(session.current_section(), 1);
        assert_eq!(session.answers().answered_count(), 0);
        assert_eq!(session.form().text(FIRST_NAME), "");
        assert!(!session.form().flag(METAPHYSICAL_CONSENT));
        assert_eq!(session.form().choice(HONESTY_WILLINGNESS), Some("yes"));
    }

    #[test]
    fn next_blocks_on_incomplete_section() {
        let mut session = QuizSession::new(FormVariant::Application);
        let err = session.next().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Please confirm that this metaphysical framework resonates with you before continuing."
        );
        assert_eq!(session.current_section(), 1);
        assert!(session.error().is_some());
    }

    #[test]
    fn next_advances_after_valid_section_and_previous_clamps() {
        let mut session = QuizSession::new(FormVariant::Application);
        session.set_flag(METAPHYSICAL_CONSENT, true).unwrap();

        assert_eq!(session.next().unwrap(), 2);
        assert_eq!(session.previous(), 1);
        assert_eq!(session.previous(), 1);
    }

    #[test]
    fn previous_clears_error() {
        let mut session = QuizSession::new(FormVariant::Application);
        session.jump_to(2).unwrap();
        assert!(session.next().is_err());
        session.previous();
        assert!(session.error().is_none());
    }

    #[test]
    fn submit_only_from_last_application_section() {
        let sink = RecordingSink::default();
        let mut session = QuizSession::new(FormVariant::Application);
        fill_application(&mut session);

        assert_eq!(
            session.submit(&sink).unwrap_err(),
            SessionError::SubmitNotAvailable { last: 5 }
        );
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn submit_revalidates_and_jumps_to_first_invalid_section() {
        let sink = RecordingSink::default();
        let mut session = QuizSession::new(FormVariant::Application);
        fill_application(&mut session);
        session.set_text(NOW_SELF, "  ").unwrap();
        session.jump_to(5).unwrap();

        let err = session.submit(&sink).unwrap_err();
        assert_eq!(err.to_string(), "Please describe how you see yourself today.");
        assert_eq!(session.current_section(), 2);
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn skipped_quiz_blocks_application_submit() {
        let sink = RecordingSink::default();
        let mut session = QuizSession::new(FormVariant::Application);
        fill_application(&mut session);
        session.answers.clear();
        session.jump_to(5).unwrap();

        let err = session.submit(&sink).unwrap_err();
        assert_eq!(err.to_string(), "Please answer all questions in The Flight Direction Quiz.");
        assert_eq!(session.current_section(), 3);
    }

    #[test]
    fn jump_not_supported_for_standalone_quiz() {
        let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
        assert_eq!(session.jump_to(1).unwrap_err(), SessionError::TabsNotSupported);
    }

    #[test]
    fn jump_rejects_out_of_range_section() {
        let mut session = QuizSession::new(FormVariant::Application);
        assert!(matches!(session.jump_to(6), Err(SessionError::Invalid(_))));
    }

    #[test]
    fn application_submit_sends_full_payload() {
        let sink = RecordingSink::default();
        let mut session = QuizSession::new(FormVariant::Application);
        fill_application(&mut session);
        session.jump_to(5).unwrap();

        let code = session.submit(&sink).unwrap().code().to_string();
        assert_eq!(code, "Trusting > Being");

        let payload = sink.last();
        assert_eq!(payload.first_name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.trusting_score, 12);
        assert!(payload.admin_email_body.contains("Flight direction: Trusting > Being"));
    }

    #[test]
    fn set_field_rejects_unknown_field() {
        let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
        assert!(matches!(
            session.set_text(FIRST_NAME, "Ada"),
            Err(SessionError::Invalid(_))
        ));
    }
}
