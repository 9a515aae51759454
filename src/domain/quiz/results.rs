//! Quiz results and their plain-text rendering.

use super::{
    compute_flight_direction, lookup_profile, AnswerRecord, FlightDirection, ProfileLookup,
    ResultCode, ScoreTally, MISSING_PROFILE_MESSAGE,
};

/// Everything derived at submit time: scores, code, profile, and the
/// answer records they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub direction: FlightDirection,
    pub profile: ProfileLookup,
    pub records: Vec<AnswerRecord>,
}

impl QuizResults {
    /// Scores `records` and resolves the matching profile.
    pub fn from_records(records: Vec<AnswerRecord>) -> Self {
        let direction = compute_flight_direction(&records);
        let profile = lookup_profile(&direction.code);
        Self {
            direction,
            profile,
            records,
        }
    }

    pub fn code(&self) -> ResultCode {
        self.direction.code
    }

    pub fn tally(&self) -> ScoreTally {
        self.direction.tally
    }
}

/// Renders the results card shown after a successful submit.
pub fn render_results(results: &QuizResults) -> String {
    let tally = results.tally();
    let mut lines: Vec<String> = vec![
        "Your Flight Direction".into(),
        format!("Flight Direction: {}", results.code()),
        String::new(),
    ];

    match results.profile.profile() {
        Some(profile) => {
            lines.push("Core Movement".into());
            lines.push(profile.core_movement.into());
            lines.push(String::new());
            lines.push("Aligned Practices".into());
            lines.extend(profile.aligned_practices.iter().map(|p| format!("• {}", p)));
            lines.push(String::new());
            lines.push("Aspire to...".into());
            lines.push(profile.aspire_to.into());
            lines.push(String::new());
            lines.push("Momentum Mantra".into());
            lines.push(profile.mantra.into());
        }
        None => lines.push(MISSING_PROFILE_MESSAGE.into()),
    }

    lines.push(String::new());
    lines.push(format!(
        "Being: {} • Flowing: {} • Trusting: {}",
        tally.being, tally.flowing, tally.trusting
    ));
    lines.push("These numbers show how often each movement appeared in your answers.".into());
    lines.join("\n")
}
