//! Profile table - static prose for every flight direction.
//!
//! The table is keyed by [`ResultCode`] and covers all ten codes the scorer
//! can produce. Lookup still returns [`ProfileLookup::Missing`] for unmapped
//! codes so callers always have something to show.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use super::{Category, ResultCode};

/// Shown in place of a profile when a code has no entry.
pub const MISSING_PROFILE_MESSAGE: &str = "This result does not have a full profile yet, but your scores still show how your Being, Flowing, and Trusting movements show up together.";

/// Descriptive text for one flight direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub core_movement: &'static str,
    pub aligned_practices: &'static [&'static str],
    pub aspire_to: &'static str,
    pub mantra: &'static str,
}

/// Outcome of a profile lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileLookup {
    Found(&'static Profile),
    Missing,
}

impl ProfileLookup {
    pub fn profile(&self) -> Option<&'static Profile> {
        match self {
            ProfileLookup::Found(p) => Some(p),
            ProfileLookup::Missing => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ProfileLookup::Found(_))
    }
}

static PROFILES: Lazy<HashMap<ResultCode, &'static Profile>> =
    Lazy::new(|| PROFILE_TABLE.iter().map(|(code, p)| (*code, p)).collect());

/// Resolves the profile for `code`.
pub fn lookup_profile(code: &ResultCode) -> ProfileLookup {
    match PROFILES.get(code) {
        Some(p) => ProfileLookup::Found(p),
        None => ProfileLookup::Missing,
    }
}

/// Resolves a profile from a rendered code such as `"Being > Flowing"`.
///
/// Unparseable strings are treated as missing.
pub fn lookup_profile_str(code: &str) -> ProfileLookup {
    code.parse::<ResultCode>()
        .map(|c| lookup_profile(&c))
        .unwrap_or(ProfileLookup::Missing)
}

static PROFILE_TABLE: [(ResultCode, Profile); 10] = [
    (
        ResultCode::Leader {
            primary: Category::Being,
            secondary: Category::Flowing,
        },
        Profile {
            core_movement: "Your flight direction is toward Being and Flowing. You grow by understanding that simply being is an honest expression of your identity. When you flow with inspiration instead of forcing outcomes, being yourself becomes more natural.",
            aligned_practices: &[
                "Lean into choices that you are inspired to make.",
                "Express yourself with simplicity instead of overthinking.",
                "Choose small areas of your life to go with the flow.",
                "Before you try doing, allow yourself to just be.",
            ],
            aspire_to: "A steady, relaxed openness that allows clarity and ease to work together.",
            mantra: "“My truth moves naturally when I let myself be.”",
        },
    ),
    (
        ResultCode::Leader {
            primary: Category::Being,
            secondary: Category::Trusting,
        },
        Profile {
            core_movement: "Your flight direction is toward Being and Trusting. Your growth lies in first trusting yourself to simply be who you are. Support becomes easier to receive when you’re rooted in who you are.",
            aligned_practices: &[
                "Embrace moments that confirm your sense of self.",
                "Invite small experiences of safe connection.",
                "Choose trust at a pace that feels grounded and real.",
                "Let yourself rely on others one step at a time.",
            ],
            aspire_to: "Grounded openness that doesn’t rush or force itself.",
            mantra: "“When I stand in my truth, trust grows naturally.”",
        },
    ),
    (
        ResultCode::Leader {
            primary: Category::Trusting,
            secondary: Category::Being,
        },
        Profile {
            core_movement: "Your flight direction is toward Trusting and Being. Your growth lies in opening yourself to experiences, and letting that openness help you understand who you’re becoming. Your identity grows from the moments you allow in.",
            aligned_practices: &[
                "Lean into curiosity about what feels true for you.",
                "Invite new experiences without pressure to commit.",
                "Choose reflection after exploration, not before.",
                "Let identity form from honest lived moments.",
            ],
            aspire_to: "Gentle courage that welcomes new information about yourself.",
            mantra: "“I discover myself through what I let in.”",
        },
    ),
    (
        ResultCode::Leader {
            primary: Category::Trusting,
            secondary: Category::Flowing,
        },
        Profile {
            core_movement: "Your flight direction is toward Trusting and Flowing. Your growth is in letting yourself trust the moment, and allowing your energy to soften and move more freely. Ease shows up when you stop bracing and follow what feels aligned.",
            aligned_practices: &[
                "Trust your instincts when something feels right.",
                "Invite small moments of ease throughout your day.",
                "Choose expression without worrying about perfection.",
                "Let trust support the pace of your movement.",
            ],
            aspire_to: "Calm confidence that lets rhythm develop naturally.",
            mantra: "“Ease finds me when I trust the moment I’m in.”",
        },
    ),
    (
        ResultCode::Leader {
            primary: Category::Flowing,
            secondary: Category::Being,
        },
        Profile {
            core_movement: "Your flight direction is toward Flowing and Being. Your growth lies in sensing your way forward and then letting that rhythm help you understand yourself more clearly. Your identity settles naturally when you listen to what feels true.",
            aligned_practices: &[
                "Lean into the movements and choices that inspire you.",
                "Invite stillness afterward to understand their meaning.",
                "Choose identity from experiences, not expectations.",
                "Let your rhythm guide what becomes real for you.",
            ],
            aspire_to: "Attuned presence that listens inwardly.",
            mantra: "“My rhythm reveals who I am.”",
        },
    ),
    (
        ResultCode::Leader {
            primary: Category::Flowing,
            secondary: Category::Trusting,
        },
        Profile {
            core_movement: "Your flight direction is toward Flowing and Trusting. Your growth lies in following the rhythm of your own movement, and allowing trust to grow once something feels aligned in your body. You open up at the pace that fits your inner rhythm.",
            aligned_practices: &[
                "Lean into embodied decisions that feel steady.",
                "Invite support after you feel the internal yes.",
                "Choose connection that respects your natural pace.",
                "Let trust emerge from your felt sense, not pressure.",
            ],
            aspire_to: "Intuitive openness guided by bodily alignment.",
            mantra: "“I trust what aligns with my rhythm.”",
        },
    ),
    (
        ResultCode::PairTie(Category::Being, Category::Flowing),
        Profile {
            core_movement: "Your flight direction balances Being and Flowing. You feel most like yourself when your clarity and your ease work together. Who you are and how you move don’t need to be separate steps.",
            aligned_practices: &[
                "Lean into decisions that feel both true and light.",
                "Invite simple expression without rehearsing it.",
                "Choose a pace that honors your energy.",
                "Let authenticity guide your presence and movement equally.",
            ],
            aspire_to: "Relaxed alignment between identity and expression.",
            mantra: "“I move as myself without effort.”",
        },
    ),
    (
        ResultCode::PairTie(Category::Being, Category::Trusting),
        Profile {
            core_movement: "Your flight direction balances Being and Trusting. Your self-awareness supports your openness, and your openness strengthens your sense of self. Trust becomes simpler when it grows from your own clarity.",
            aligned_practices: &[
                "Lean into clarity that comes from honest reflection.",
                "Invite connection slowly and meaningfully.",
                "Choose presence instead of prediction.",
                "Let trust build from what feels internally true.",
            ],
            aspire_to: "Grounded receptivity.",
            mantra: "“I trust in ways that honor who I am.”",
        },
    ),
    (
        ResultCode::PairTie(Category::Flowing, Category::Trusting),
        Profile {
            core_movement: "Your flight direction balances Flowing and Trusting. When you trust the moment, your expression becomes easier and more natural. You stay open while letting your energy move in a way that feels right for you.",
            aligned_practices: &[
                "Lean into reciprocity in relationships.",
                "Invite softness instead of guarding.",
                "Choose expression without overthinking.",
                "Let trust give your movement its rhythm.",
            ],
            aspire_to: "Relaxed receptivity with gentle momentum.",
            mantra: "“I express myself more easily when I trust where I am.”",
        },
    ),
    (
        ResultCode::AllTie,
        Profile {
            core_movement: "Your flight direction holds Being, Flowing, and Trusting together. All three movements are active in you, which means you carry identity, ease, and openness at the same time. Your work is learning which one needs to lead in each moment without abandoning the others.",
            aligned_practices: &[
                "Notice which movement is speaking the loudest—Being, Flowing, or Trusting—before you act.",
                "Invite small experiments where one movement leads and the other two support.",
                "Reflect afterward: “Did I let one part run the show, or did they work together?”",
                "Let yourself shift roles gently instead of trying to be everything at once.",
            ],
            aspire_to: "Integrated curiosity — willing to rotate leadership among your inner movements while staying whole.",
            mantra: "“All of my movements belong; I choose which one leads right now.”",
        },
    ),
];
