//! Scorer - tallies answers and derives the flight direction.
//!
//! # Classification
//!
//! 1. Count answers per category.
//! 2. All three share the maximum: [`ResultCode::AllTie`].
//! 3. Two share the maximum: [`ResultCode::PairTie`], names alphabetical.
//! 4. One leader: the secondary is the higher of the other two, with ties
//!    going to the category earlier in [`Category::all`].
//!
//! The function is total: an empty answer list is a three-way tie at zero.

use serde::{Deserialize, Serialize};

use super::{AnswerRecord, Category, ResultCode};

/// Number of answers per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreTally {
    pub being: u32,
    pub flowing: u32,
    pub trusting: u32,
}

impl ScoreTally {
    pub fn new(being: u32, flowing: u32, trusting: u32) -> Self {
        Self { being, flowing, trusting }
    }

    /// Tallies a sequence of categories in a single pass.
    pub fn from_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        let mut tally = Self::default();
        for category in categories {
            tally.increment(category);
        }
        tally
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Being => self.being,
            Category::Flowing => self.flowing,
            Category::Trusting => self.trusting,
        }
    }

    pub fn increment(&mut self, category: Category) {
        match category {
            Category::Being => self.being += 1,
            Category::Flowing => self.flowing += 1,
            Category::Trusting => self.trusting += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.being + self.flowing + self.trusting
    }

    /// Classifies this tally into a result code.
    pub fn classify(&self) -> ResultCode {
        let max = Category::all().iter().map(|c| self.get(*c)).max().unwrap_or(0);
        let top: Vec<Category> = Category::all()
            .iter()
            .copied()
            .filter(|c| self.get(*c) == max)
            .collect();

        match *top.as_slice() {
            [primary] => ResultCode::Leader {
                primary,
                secondary: self.secondary_after(primary),
            },
            [a, b] => ResultCode::pair(a, b),
            _ => ResultCode::AllTie,
        }
    }

    /// Highest of the categories other than `primary`; on equal counts the
    /// first one in priority order wins.
    fn secondary_after(&self, primary: Category) -> Category {
        Category::all()
            .iter()
            .copied()
            .filter(|c| *c != primary)
            .fold(None, |best: Option<Category>, candidate| match best {
                Some(b) if self.get(b) >= self.get(candidate) => Some(b),
                _ => Some(candidate),
            })
            .unwrap_or(primary)
    }
}

/// Scorer output: the result code plus the raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightDirection {
    pub code: ResultCode,
    pub tally: ScoreTally,
}

impl FlightDirection {
    pub fn from_tally(tally: ScoreTally) -> Self {
        Self {
            code: tally.classify(),
            tally,
        }
    }
}

/// Tallies `answers` and classifies the result.
///
/// Callers enforce "all questions answered" beforehand; shorter lists are
/// scored as given.
pub fn compute_flight_direction(answers: &[AnswerRecord]) -> FlightDirection {
    FlightDirection::from_tally(ScoreTally::from_categories(
        answers.iter().map(|a| a.category),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Category::*;

    fn records(categories: &[Category]) -> Vec<AnswerRecord> {
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| AnswerRecord::bare(i, *c))
            .collect()
    }

    fn code_for(b: u32, f: u32, t: u32) -> String {
        FlightDirection::from_tally(ScoreTally::new(b, f, t)).code.to_string()
    }

    #[test]
    fn being_leads_with_flowing_trusting_tie() {
        let answers = records(&[
            Being, Flowing, Being, Trusting, Being, Flowing, Being, Trusting, Flowing, Being,
            Trusting,
        ]);
        let result = compute_flight_direction(&answers);

        assert_eq!(result.tally, ScoreTally::new(5, 3, 3));
        assert_eq!(result.code.to_string(), "Being > Flowing");
    }

    #[test]
    fn all_being_falls_back_to_priority_secondary() {
        let answers = records(&[Being; 11]);
        let result = compute_flight_direction(&answers);

        assert_eq!(result.tally, ScoreTally::new(11, 0, 0));
        assert_eq!(result.code.to_string(), "Being > Flowing");
    }

    #[test]
    fn trusting_leader_prefers_being_on_tie() {
        assert_eq!(code_for(2, 2, 7), "Trusting > Being");
    }

    #[test]
    fn secondary_follows_higher_score_not_priority() {
        assert_eq!(code_for(1, 6, 4), "Flowing > Trusting");
        assert_eq!(code_for(6, 1, 4), "Being > Trusting");
    }

    #[test]
    fn four_four_three_is_alphabetical_pair() {
        let first = records(&[
            Flowing, Flowing, Flowing, Flowing, Being, Being, Being, Being, Trusting, Trusting,
            Trusting,
        ]);
        let second = records(&[
            Being, Trusting, Being, Flowing, Trusting, Being, Flowing, Being, Flowing, Trusting,
            Flowing,
        ]);

        assert_eq!(compute_flight_direction(&first).code.to_string(), "Being = Flowing");
        assert_eq!(compute_flight_direction(&second).code.to_string(), "Being = Flowing");
        assert_eq!(code_for(3, 4, 4), "Flowing = Trusting");
        assert_eq!(code_for(4, 3, 4), "Being = Trusting");
    }

    #[test]
    fn empty_answers_are_an_all_tie() {
        let result = compute_flight_direction(&[]);
        assert_eq!(result.tally, ScoreTally::default());
        assert_eq!(result.code, ResultCode::AllTie);
        assert_eq!(result.code.to_string(), "Being = Flowing = Trusting");
    }

    #[test]
    fn equal_nonzero_counts_are_an_all_tie() {
        assert_eq!(code_for(4, 4, 4), "Being = Flowing = Trusting");
    }

    #[test]
    fn scoring_is_idempotent() {
        let answers = records(&[Trusting, Being, Trusting, Flowing]);
        assert_eq!(compute_flight_direction(&answers), compute_flight_direction(&answers));
    }

    proptest! {
        #[test]
        fn tally_total_matches_answer_count(cats in prop::collection::vec(0usize..3, 0..40)) {
            let answers: Vec<AnswerRecord> = cats
                .iter()
                .enumerate()
                .map(|(i, c)| AnswerRecord::bare(i, Category::all()[*c]))
                .collect();
            let result = compute_flight_direction(&answers);
            prop_assert_eq!(result.tally.total() as usize, answers.len());
        }

        #[test]
        fn single_leader_names_argmax_and_best_remaining(b in 0u32..20, f in 0u32..20, t in 0u32..20) {
            let tally = ScoreTally::new(b, f, t);
            let max = b.max(f).max(t);
            let leaders: Vec<Category> = Category::all().iter().copied().filter(|c| tally.get(*c) == max).collect();
            prop_assume!(leaders.len() == 1);

            let primary = leaders[0];
            let rest: Vec<Category> = Category::all().iter().copied().filter(|c| *c != primary).collect();
            let expected_secondary = if tally.get(rest[1]) > tally.get(rest[0]) { rest[1] } else { rest[0] };

            prop_assert_eq!(
                tally.classify(),
                ResultCode::Leader { primary, secondary: expected_secondary }
            );
        }

        #[test]
        fn pair_tie_is_permutation_invariant(top in 1u32..20, low_gap in 1u32..20) {
            let low = top.saturating_sub(low_gap);
            prop_assume!(low < top);
            let a = ScoreTally::new(top, top, low).classify().to_string();
            let b = ScoreTally::new(top, low, top).classify().to_string();
            let c = ScoreTally::new(low, top, top).classify().to_string();
            prop_assert_eq!(a, "Being = Flowing");
            prop_assert_eq!(b, "Being = Trusting");
            prop_assert_eq!(c, "Flowing = Trusting");
        }

        #[test]
        fn equal_triples_are_all_tie(n in 0u32..50) {
            prop_assert_eq!(ScoreTally::new(n, n, n).classify(), ResultCode::AllTie);
        }
    }
}
