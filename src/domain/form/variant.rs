//! Form variants - the standalone quiz and the five-section application.
//!
//! Both run on the same engine; they differ only in their section schemas
//! and payload metadata.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{ChoiceSpec, FieldKind, FieldSpec, Rule, SectionSchema};

/// Field ids of the application form.
pub mod fields {
    pub const METAPHYSICAL_CONSENT: &str = "metaphysicalConsent";

    pub const DAMAGING_EXPERIENCE: &str = "q1DamagingExperience";
    pub const BEFORE_SELF: &str = "q2BeforeSelf";
    pub const NOW_SELF: &str = "q3NowSelf";
    pub const HAS_TRUSTED_PERSON: &str = "q4HasTrustedPerson";
    pub const TRUSTED_PERSON_DESCRIPTION: &str = "q4TrustedPersonDescription";
    pub const HAS_FIRM_BOUNDARIES: &str = "q5HasFirmBoundaries";
    pub const HAS_WEAK_BOUNDARIES: &str = "q6HasWeakBoundaries";
    pub const BOUNDARIES_EXPLANATION: &str = "q6WeakBoundariesProtection";
    pub const HEALED_SELF: &str = "q7HealedSelfAndBoundaries";
    pub const FAULT_VS_RESPONSIBILITY: &str = "q8FaultVsResponsibility";
    pub const PRIVATE_SPACE: &str = "q9AgreesPrivateSpace";
    pub const HONESTY_WILLINGNESS: &str = "q10HonestyWillingness";

    pub const READINESS: &str = "q11Readiness";
    pub const INVESTMENT_RANGE: &str = "investmentRange";

    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const BIRTHDATE: &str = "birthdate";
    pub const PRONOUNS: &str = "pronouns";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const CONTACT_EMAIL: &str = "contactEmail";
    pub const PREFERRED_CONTACT: &str = "preferredContact";
    pub const REFERRED: &str = "referredToMe";
    pub const REFERRER_NAME: &str = "referrerName";
    pub const TIME_ZONE: &str = "timeZone";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const COUNTRY: &str = "country";
    pub const ZIP_CODE: &str = "zipCode";
}

use fields::*;

const YES_NO: &[ChoiceSpec] = &[ChoiceSpec::new("yes", "Yes"), ChoiceSpec::new("no", "No")];

const PRIVATE_SPACE_CHOICES: &[ChoiceSpec] = &[
    ChoiceSpec::new(
        "yes",
        "Yes, I have access to a private, indoor space for a 90-minute virtual session.",
    ),
    ChoiceSpec::new(
        "no",
        "No, I don't have access to a private indoor space at any time. (It’s okay.)",
    ),
];

const HONESTY_CHOICES: &[ChoiceSpec] = &[
    ChoiceSpec::new("yes", "Yes, I'm willing — even if it is uncomfortable."),
    ChoiceSpec::new("unsure", "I'm not sure, but I want to try."),
    ChoiceSpec::new("no", "I prefer to stay comfortable right now."),
];

const READINESS_CHOICES: &[ChoiceSpec] = &[
    ChoiceSpec::new("small", "I can set aside a small amount of time right now to begin."),
    ChoiceSpec::new("steady", "I’m ready to make steady space each week for focused inner work."),
    ChoiceSpec::new("allIn", "I’m fully ready to center my growth and create room for deep change."),
];

const INVESTMENT_CHOICES: &[ChoiceSpec] = &[
    ChoiceSpec::new("light", "Light to Moderate Support — $250–$450/month"),
    ChoiceSpec::new("moderateHigh", "Moderate to High Support — $300–$550/month"),
    ChoiceSpec::new("highContact", "High-Contact, All-Inclusive Support — $600–$900/month"),
];

const PRONOUN_CHOICES: &[ChoiceSpec] = &[
    ChoiceSpec::new("she/her", "She / Her"),
    ChoiceSpec::new("he/him", "He / Him"),
    ChoiceSpec::new("they/them", "Non-binary / They / Them"),
];

const CONTACT_CHOICES: &[ChoiceSpec] = &[
    ChoiceSpec::new("text", "Text"),
    ChoiceSpec::new("call", "Call"),
    ChoiceSpec::new("email", "Email"),
];

const QUIZ_INSTRUCTIONS: &str = "For each statement, select the one that feels most true for you right now. There are no wrong answers — each response reflects a pattern of energy within the Self.";

static STANDALONE_SECTIONS: Lazy<Vec<SectionSchema>> = Lazy::new(|| {
    vec![SectionSchema::new("The Three Contradictions Quiz", "Quiz")
        .intro(QUIZ_INSTRUCTIONS)
        .quiz()
        .rule(Rule::quiz("Please answer all questions before seeing your result."))]
});

static APPLICATION_SECTIONS: Lazy<Vec<SectionSchema>> = Lazy::new(|| {
    vec![
        framework_section(),
        support_section(),
        quiz_section(),
        readiness_section(),
        personal_details_section(),
    ]
});

fn framework_section() -> SectionSchema {
    SectionSchema::new("Section 1 — Framework & Consent", "Section 1: Framework & Consent")
        .intro("When entering deep inner work, it’s important to understand the beliefs and education that guide your hypnotherapist.")
        .intro("I received my foundational training through the Hypnosis Motivation Institute (HMI) and have since integrated that education into my own metaphysical framework, which strongly informs my practice.")
        .intro("I operate from the understanding that each individual Self is composed of Consciousness, Subconscious, and Manifestation — all expressions of I Am, the pure creative awareness that gives rise to your reality. We access I Am through the divine inspiration of The Breath. Together, these five aspects form what I call The Five-Fold Self.")
        .intro("Each Self moves through its own states of mind, patterns of behavior, and movements of expression. Exploring and harmonizing these movements is the essence of this work.")
        .intro("This is an existential framework — a lens through which to experience healing and self-realization. I am accepting of all spiritual and religious backgrounds and offer a neutral space for anyone seeking growth in the metaphysical and existential realms of human experience.")
        .field(FieldSpec::new(
            METAPHYSICAL_CONSENT,
            "Framework consent",
            FieldKind::Checkbox {
                label: "Yes, this metaphysical and symbolic framework resonates with me, and I am comfortable working within it.",
            },
        ))
        .rule(Rule::flag(
            METAPHYSICAL_CONSENT,
            "Please confirm that this metaphysical framework resonates with you before continuing.",
        ))
}

fn support_section() -> SectionSchema {
    SectionSchema::new(
        "Section 2 — Support, Boundaries & Self-image",
        "Section 2: Support & Boundaries",
    )
    .field(FieldSpec::new(DAMAGING_EXPERIENCE, "1. What damaging experience(s) are you seeking support for?", FieldKind::TextArea))
    .field(FieldSpec::new(BEFORE_SELF, "2. Before this experience, how would you describe yourself?", FieldKind::TextArea))
    .field(FieldSpec::new(NOW_SELF, "3. How would you describe yourself today?", FieldKind::TextArea))
    .field(FieldSpec::new(HAS_TRUSTED_PERSON, "4. Do you have a trusted person you can confide in?", FieldKind::Radio { choices: YES_NO }))
    .field(FieldSpec::new(TRUSTED_PERSON_DESCRIPTION, "If yes, how would this person describe who you are today? (optional)", FieldKind::TextArea))
    .field(FieldSpec::new(HAS_FIRM_BOUNDARIES, "5. Do you currently have any firm boundaries in your life?", FieldKind::Radio { choices: YES_NO }))
    .field(FieldSpec::new(HAS_WEAK_BOUNDARIES, "6. Do you have any weak or inconsistent boundaries?", FieldKind::Radio { choices: YES_NO }))
    .field(FieldSpec::new(BOUNDARIES_EXPLANATION, "Explain your answers to questions 5 and 6.", FieldKind::TextArea))
    .field(FieldSpec::new(HEALED_SELF, "7. When you imagine the healed version of yourself, what are you like then and what are your boundaries like?", FieldKind::TextArea))
    .field(FieldSpec::new(FAULT_VS_RESPONSIBILITY, "8. What is the difference between fault and responsibility?", FieldKind::TextArea))
    .field(FieldSpec::new(PRIVATE_SPACE, "9. Do you agree to meet from a quiet, private indoor space?", FieldKind::Radio { choices: PRIVATE_SPACE_CHOICES }))
    .field(
        FieldSpec::new(
            HONESTY_WILLINGNESS,
            "10. Personal growth sometimes asks us to look at uncomfortable truths about personal behavior, thoughts, and emotions. How willing are you to explore your patterns honestly?",
            FieldKind::Radio { choices: HONESTY_CHOICES },
        )
        .with_default("yes"),
    )
    .rule(Rule::text(DAMAGING_EXPERIENCE, "Please describe the experience you are seeking support for."))
    .rule(Rule::text(BEFORE_SELF, "Please describe how you saw yourself before this experience."))
    .rule(Rule::text(NOW_SELF, "Please describe how you see yourself today."))
    .rule(Rule::choice(HAS_TRUSTED_PERSON, "Please indicate whether you have a trusted person to confide in."))
    .rule(Rule::choice(HAS_FIRM_BOUNDARIES, "Please answer whether you currently have firm boundaries."))
    .rule(Rule::choice(HAS_WEAK_BOUNDARIES, "Please answer whether you have weak or inconsistent boundaries."))
    .rule(Rule::text(BOUNDARIES_EXPLANATION, "Please explain your answers about boundaries."))
    .rule(Rule::text(HEALED_SELF, "Please describe your healed self and healed boundaries."))
    .rule(Rule::text(FAULT_VS_RESPONSIBILITY, "Please share your understanding of fault vs responsibility."))
    .rule(Rule::choice(PRIVATE_SPACE, "Please confirm whether you have access to a quiet, private indoor space."))
    .rule(Rule::choice(HONESTY_WILLINGNESS, "Please answer how willing you are to explore your patterns honestly."))
}

fn quiz_section() -> SectionSchema {
    SectionSchema::new(
        "Section 3 — Inner Movements (The Three Contradictions Quiz)",
        "Section 3: Inner Movements Quiz",
    )
    .intro(QUIZ_INSTRUCTIONS)
    .quiz()
    .rule(Rule::quiz("Please answer all questions in The Flight Direction Quiz."))
}

fn readiness_section() -> SectionSchema {
    SectionSchema::new("Section 4 — Readiness & Commitment", "Section 4: Readiness & Commitment")
        .intro("Transformation asks for more than curiosity — it asks for time, energy, and devotion to your own becoming. This section helps me understand how ready you are to enter that kind of partnership.")
        .field(FieldSpec::new(
            READINESS,
            "11. How ready are you to give time, focus, and emotional space to your healing journey?",
            FieldKind::Radio { choices: READINESS_CHOICES },
        ))
        .field(FieldSpec::new(
            INVESTMENT_RANGE,
            "Investment in Your Transformation: which range feels most aligned and comfortable for where you are right now?",
            FieldKind::Radio { choices: INVESTMENT_CHOICES },
        ))
        .rule(Rule::choice(READINESS, "Please select how ready you feel to give time and focus to this work."))
        .rule(Rule::choice(INVESTMENT_RANGE, "Please choose the investment range that feels most aligned right now."))
}

fn personal_details_section() -> SectionSchema {
    SectionSchema::new("Section 5 — Personal Details", "Section 5: Personal Details")
        .field(FieldSpec::new(FIRST_NAME, "First Name", FieldKind::TextInput))
        .field(FieldSpec::new(LAST_NAME, "Last Name", FieldKind::TextInput))
        .field(FieldSpec::new(BIRTHDATE, "Birthdate", FieldKind::Date))
        .field(FieldSpec::new(PRONOUNS, "What are your pronouns?", FieldKind::Radio { choices: PRONOUN_CHOICES }))
        .field(FieldSpec::new(PHONE_NUMBER, "Phone number", FieldKind::TextInput))
        .field(FieldSpec::new(CONTACT_EMAIL, "Email", FieldKind::TextInput))
        .field(FieldSpec::new(PREFERRED_CONTACT, "Preferred method of communication?", FieldKind::Radio { choices: CONTACT_CHOICES }))
        .field(FieldSpec::new(REFERRED, "Were you referred to me?", FieldKind::Radio { choices: YES_NO }))
        .field(FieldSpec::new(REFERRER_NAME, "If so, by who?", FieldKind::TextInput))
        .field(FieldSpec::new(TIME_ZONE, "Your Time Zone", FieldKind::TextInput))
        .field(FieldSpec::new(CITY, "City", FieldKind::TextInput))
        .field(FieldSpec::new(STATE, "State", FieldKind::TextInput))
        .field(FieldSpec::new(COUNTRY, "Country", FieldKind::TextInput))
        .field(FieldSpec::new(ZIP_CODE, "Zip code", FieldKind::TextInput))
        .rule(Rule::text(FIRST_NAME, "Please enter your first name."))
        .rule(Rule::text(LAST_NAME, "Please enter your last name."))
        .rule(Rule::text(BIRTHDATE, "Please enter your birthdate."))
        .rule(Rule::choice(PRONOUNS, "Please select your pronouns."))
        .rule(Rule::text(PHONE_NUMBER, "Please enter a phone number for contact."))
        .rule(Rule::text(CONTACT_EMAIL, "Please enter an email address for contact."))
        .rule(Rule::choice(PREFERRED_CONTACT, "Please select your preferred method of communication."))
        .rule(Rule::text(TIME_ZONE, "Please enter your time zone."))
        .rule(Rule::text(CITY, "Please enter your city."))
        .rule(Rule::text(STATE, "Please enter your state."))
        .rule(Rule::text(COUNTRY, "Please enter your country."))
        .rule(Rule::text(ZIP_CODE, "Please enter your zip code."))
        .rule(Rule::choice(REFERRED, "Please indicate whether you were referred to me."))
        .rule(Rule::text_when(REFERRER_NAME, REFERRED, "yes", "Please share who referred you."))
}

/// Which form a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    /// Quiz only, on a single page.
    StandaloneQuiz,
    /// Intake application with the quiz as section 3.
    #[default]
    Application,
}

impl FormVariant {
    pub fn sections(&self) -> &'static [SectionSchema] {
        match self {
            FormVariant::StandaloneQuiz => &STANDALONE_SECTIONS,
            FormVariant::Application => &APPLICATION_SECTIONS,
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections().len()
    }

    /// Whether sections can be selected directly from a tab bar.
    pub fn supports_tabs(&self) -> bool {
        matches!(self, FormVariant::Application)
    }

    /// Whether submit is offered on every section rather than only the last.
    pub fn submit_from_any_section(&self) -> bool {
        matches!(self, FormVariant::StandaloneQuiz)
    }

    pub fn quiz_title(&self) -> &'static str {
        match self {
            FormVariant::StandaloneQuiz => "The Three Contradictions Quiz",
            FormVariant::Application => "Hypnotherapy Application + The Three Contradictions Quiz",
        }
    }

    pub fn quiz_description(&self) -> &'static str {
        match self {
            FormVariant::StandaloneQuiz => {
                "Measures how Being, Flowing, and Trusting move together in your system."
            }
            FormVariant::Application => {
                "Full application (framework, support history, readiness, personal details) plus inner movement profile."
            }
        }
    }

    /// Tag identifying the variant in the payload.
    pub fn quiz_type(&self) -> &'static str {
        match self {
            FormVariant::StandaloneQuiz => "threeContradictions",
            FormVariant::Application => "applicationWithThreeContradictions",
        }
    }
}
