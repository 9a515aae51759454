//! Integration tests for the standalone quiz flow.
//!
//! These tests drive a session end to end:
//! 1. Answers are selected through the session
//! 2. Submit scores the quiz and resolves a profile
//! 3. The payload reaches the sink
//! 4. Reset returns the session to its initial state

use three_contradictions::adapters::InMemorySink;
use three_contradictions::domain::form::FormVariant;
use three_contradictions::domain::foundation::{DomainError, ErrorCode, SessionStatus};
use three_contradictions::domain::quiz::{
    render_results, AnswerRecord, Category, QuestionBank, ResultCode,
};
use three_contradictions::domain::session::{QuizSession, SessionError};

// =============================================================================
// Helpers
// =============================================================================

fn answer_with(session: &mut QuizSession, pick: impl Fn(usize) -> Category) {
    for idx in 0..session.bank().len() {
        session.select_answer(idx, pick(idx)).unwrap();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn majority_being_quiz_yields_being_over_flowing() {
    let sink = InMemorySink::new();
    let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
    // 6 Being, 3 Flowing, 3 Trusting
    answer_with(&mut session, |idx| match idx {
        0..=5 => Category::Being,
        6..=8 => Category::Flowing,
        _ => Category::Trusting,
    });

    let results = session.submit(&sink).unwrap().clone();

    assert_eq!(
        results.code(),
        ResultCode::Leader {
            primary: Category::Being,
            secondary: Category::Flowing
        }
    );
    assert_eq!(results.tally().total(), 12);
    assert!(results.profile.is_found());

    let text = render_results(&results);
    assert!(text.contains("Flight Direction: Being > Flowing"));
    assert!(text.contains("Being: 6 • Flowing: 3 • Trusting: 3"));
}

#[test]
fn payload_records_every_answer_with_trait_key() {
    let sink = InMemorySink::new();
    let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
    answer_with(&mut session, |_| Category::Flowing);
    session.submit(&sink).unwrap();

    let payload = sink.last().unwrap();
    assert_eq!(payload.quiz_type, "threeContradictions");
    assert_eq!(payload.quiz_title, "The Three Contradictions Quiz");
    assert_eq!(payload.first_name, "");
    assert_eq!(payload.admin_email_body, "");
    assert_eq!(payload.flowing_score, 12);

    let records: Vec<AnswerRecord> = serde_json::from_str(&payload.raw_scores_json).unwrap();
    assert_eq!(records.len(), QuestionBank::standard().len());
    assert_eq!(records[0].index, 0);
    assert_eq!(records[0].category, Category::Flowing);

    let raw: serde_json::Value = serde_json::from_str(&payload.raw_scores_json).unwrap();
    assert_eq!(raw[0]["trait"], "Flowing");
}

#[test]
fn payload_serializes_camel_case_columns() {
    let sink = InMemorySink::new();
    let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
    answer_with(&mut session, |_| Category::Trusting);
    session.submit(&sink).unwrap();

    let json = serde_json::to_value(sink.last().unwrap()).unwrap();
    for key in [
        "timestamp",
        "firstName",
        "rawScoresJson",
        "adminEmailBody",
        "quizType",
        "beingScore",
        "flowingScore",
        "trustingScore",
    ] {
        assert!(json.get(key).is_some(), "missing column {}", key);
    }
    assert_eq!(json["trustingScore"], 12);
}

#[test]
fn incomplete_quiz_blocks_submit_and_surfaces_message() {
    let sink = InMemorySink::new();
    let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
    session.select_answer(0, Category::Being).unwrap();

    let err = session.submit(&sink).unwrap_err();
    let domain: DomainError = err.into();

    assert_eq!(domain.code, ErrorCode::SectionIncomplete);
    assert_eq!(
        session.error(),
        Some("Please answer all questions before seeing your result.")
    );
    assert_eq!(sink.submission_count(), 0);
}

#[test]
fn retake_allows_a_second_submission() {
    let sink = InMemorySink::new();
    let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
    answer_with(&mut session, |_| Category::Being);
    session.submit(&sink).unwrap();
    assert_eq!(session.status(), SessionStatus::Completed);
    assert_eq!(
        session.select_answer(0, Category::Flowing).unwrap_err(),
        SessionError::AlreadyCompleted
    );

    session.reset();
    assert!(session.results().is_none());
    assert_eq!(session.answers().answered_count(), 0);

    // 4 Being, 4 Flowing, 4 Trusting
    answer_with(&mut session, |idx| Category::all()[idx % 3]);
    let code = session.submit(&sink).unwrap().code();

    assert_eq!(code, ResultCode::AllTie);
    assert_eq!(code.to_string(), "Being = Flowing = Trusting");
    assert_eq!(sink.submission_count(), 2);
}

#[test]
fn changing_an_answer_replaces_the_selection() {
    let sink = InMemorySink::new();
    let mut session = QuizSession::new(FormVariant::StandaloneQuiz);
    answer_with(&mut session, |_| Category::Being);
    session.select_answer(0, Category::Trusting).unwrap();

    let tally = session.submit(&sink).unwrap().tally();
    assert_eq!(tally.being, 11);
    assert_eq!(tally.trusting, 1);
}
