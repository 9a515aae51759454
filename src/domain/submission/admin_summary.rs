//! Admin summary - the plain-text digest of an application.
//!
//! Sent as `adminEmailBody` so an operator can read a submission without
//! opening the spreadsheet.

use crate::domain::form::{fields::*, FormState};
use crate::domain::quiz::QuizResults;

/// Builds the labelled, line-per-answer summary of an application.
pub fn build_admin_summary(form: &FormState, results: &QuizResults) -> String {
    let mut lines: Vec<String> = Vec::new();
    let tally = results.tally();

    lines.push("New hypnotherapy application + Three Contradictions profile".into());
    lines.push(String::new());
    lines.push("Client details:".into());
    lines.push(format!("Name: {} {}", form.text(FIRST_NAME), form.text(LAST_NAME)));
    lines.push(format!("Email: {}", form.text(CONTACT_EMAIL)));
    lines.push(format!("Phone: {}", form.text(PHONE_NUMBER)));
    lines.push(format!(
        "Location: {}, {}, {} {}",
        form.text(CITY),
        form.text(STATE),
        form.text(COUNTRY),
        form.text(ZIP_CODE)
    ));
    lines.push(format!("Time Zone: {}", form.text(TIME_ZONE)));
    lines.push(String::new());

    lines.push("Section 2 — Support / Boundaries / Self-image:".into());
    lines.push(format!("1) Damaging experience: {}", form.text(DAMAGING_EXPERIENCE)));
    lines.push(format!("2) Before self: {}", form.text(BEFORE_SELF)));
    lines.push(format!("3) Now self: {}", form.text(NOW_SELF)));
    lines.push(format!(
        "4) Has trusted person: {}",
        form.choice(HAS_TRUSTED_PERSON).unwrap_or("not answered")
    ));
    let description = form.text(TRUSTED_PERSON_DESCRIPTION);
    if !description.trim().is_empty() {
        lines.push(format!("   How they would describe client: {}", description));
    }
    lines.push(format!("5) Firm boundaries: {}", choice_or_empty(form, HAS_FIRM_BOUNDARIES)));
    lines.push(format!("6) Weak boundaries: {}", choice_or_empty(form, HAS_WEAK_BOUNDARIES)));
    let explanation = form.text(BOUNDARIES_EXPLANATION);
    lines.push(format!(
        "   Explanation (5 & 6): {}",
        if explanation.is_empty() { "—" } else { explanation }
    ));
    lines.push(format!("7) Healed self & boundaries: {}", form.text(HEALED_SELF)));
    lines.push(format!("8) Fault vs responsibility: {}", form.text(FAULT_VS_RESPONSIBILITY)));
    let private_space = match form.choice(PRIVATE_SPACE) {
        Some("yes") => "Has private indoor space",
        Some("no") => "Does NOT have private indoor space",
        _ => "not answered",
    };
    lines.push(format!("9) Private space: {}", private_space));
    lines.push(format!("10) Honesty willingness: {}", choice_or_empty(form, HONESTY_WILLINGNESS)));
    lines.push(String::new());

    lines.push("Section 4 — Readiness & Commitment:".into());
    lines.push(format!("Readiness: {}", choice_or_empty(form, READINESS)));
    lines.push(format!("Investment range: {}", choice_or_empty(form, INVESTMENT_RANGE)));
    lines.push(String::new());

    lines.push("Section 5 — Additional info:".into());
    lines.push(format!("Pronouns: {}", choice_or_empty(form, PRONOUNS)));
    lines.push(format!("Referred: {}", choice_or_empty(form, REFERRED)));
    if form.choice(REFERRED) == Some("yes") {
        lines.push(format!("Referred by: {}", form.text(REFERRER_NAME)));
    }
    lines.push(String::new());

    lines.push("Three Contradictions quiz:".into());
    lines.push(format!("Flight direction: {}", results.code()));
    lines.push(format!(
        "Scores — Being: {}, Flowing: {}, Trusting: {}",
        tally.being, tally.flowing, tally.trusting
    ));
    if let Some(profile) = results.profile.profile() {
        lines.push(String::new());
        lines.push("Core movement:".into());
        lines.push(profile.core_movement.into());
        lines.push(String::new());
        lines.push("Aligned practices:".into());
        lines.extend(profile.aligned_practices.iter().map(|p| format!("• {}", p)));
        lines.push(String::new());
        lines.push("Aspire to:".into());
        lines.push(profile.aspire_to.into());
        lines.push(String::new());
        lines.push("Momentum mantra:".into());
        lines.push(profile.mantra.into());
    }
    lines.push(String::new());

    lines.push("Raw answer records:".into());
    lines.extend(results.records.iter().enumerate().map(|(idx, r)| {
        format!("{}. {} — [{}] {}", idx + 1, r.question, r.category, r.answer)
    }));

    lines.join("\n")
}

fn choice_or_empty<'a>(form: &'a FormState, id: &str) -> &'a str {
    form.choice(id).unwrap_or("")
}
