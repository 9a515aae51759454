//! Question bank - the fixed, ordered list of quiz questions.
//!
//! Every question offers exactly three options, one per [`Category`].
//! Order matters for display and for the order of raw answer records,
//! never for scoring.

use serde::Serialize;

use super::Category;

/// One selectable answer to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub text: &'static str,
    pub category: Category,
}

impl QuizOption {
    pub const fn new(text: &'static str, category: Category) -> Self {
        Self { text, category }
    }
}

/// A question with exactly three options covering all three categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: [QuizOption; 3],
}

impl Question {
    pub const fn new(text: &'static str, options: [QuizOption; 3]) -> Self {
        Self { text, options }
    }

    /// Returns the option tagged with the given category.
    pub fn option_for(&self, category: Category) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.category == category)
    }

    /// True when the three options carry three distinct categories.
    pub fn covers_all_categories(&self) -> bool {
        Category::all()
            .iter()
            .all(|c| self.options.iter().filter(|o| o.category == *c).count() == 1)
    }
}

/// Read-only, ordered collection of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// Wraps a static question list.
    pub const fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    /// The Three Contradictions question bank.
    pub fn standard() -> Self {
        Self::new(&STANDARD_QUESTIONS)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Question> {
        self.questions.iter()
    }

    /// Looks up the option for `category` on question `index`.
    pub fn option_for(&self, index: usize, category: Category) -> Option<&'static QuizOption> {
        self.get(index)?.options.iter().find(|o| o.category == category)
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD_QUESTIONS: [Question; 12] = [
    Question::new(
        "When something goes wrong",
        [
            QuizOption::new("I think about it a lot and wonder what it means about me.", Category::Being),
            QuizOption::new("I hurry to fix it or make everyone feel better.", Category::Flowing),
            QuizOption::new("I plan what to do next so it won’t happen again.", Category::Trusting),
        ],
    ),
    Question::new(
        "When someone is upset with me",
        [
            QuizOption::new("I explain what I meant and take charge to fix it.", Category::Trusting),
            QuizOption::new("I go over what I said and worry how it sounded.", Category::Being),
            QuizOption::new("I say sorry fast and try to make peace.", Category::Flowing),
        ],
    ),
    Question::new(
        "When I feel nervous or off balance",
        [
            QuizOption::new("I stay busy helping others.", Category::Flowing),
            QuizOption::new("I clean up or plan to feel in control again.", Category::Trusting),
            QuizOption::new("I think about every reason I might feel this way.", Category::Being),
        ],
    ),
    Question::new(
        "When I make a mistake",
        [
            QuizOption::new("I feel bad and think hard about why it happened.", Category::Being),
            QuizOption::new("I try even harder to make up for it.", Category::Flowing),
            QuizOption::new("I set new rules so it won’t happen again.", Category::Trusting),
        ],
    ),
    Question::new(
        "When someone lets me down",
        [
            QuizOption::new("I make new rules or step back to stay safe.", Category::Trusting),
            QuizOption::new("I wonder why they did that.", Category::Being),
            QuizOption::new("I forgive them and do the extra work myself.", Category::Flowing),
        ],
    ),
    Question::new(
        "When life slows down",
        [
            QuizOption::new("I look for someone or something that still needs me.", Category::Flowing),
            QuizOption::new("I get restless and find something to do.", Category::Trusting),
            QuizOption::new("I start thinking deeply and lose track of time.", Category::Being),
        ],
    ),
    Question::new(
        "When people don’t understand me",
        [
            QuizOption::new("I wonder what I did wrong.", Category::Being),
            QuizOption::new("I explain myself again and again to make peace.", Category::Flowing),
            QuizOption::new("I set things straight so it won’t happen next time.", Category::Trusting),
        ],
    ),
    Question::new(
        "When there is conflict",
        [
            QuizOption::new("I set clear limits to stop the fight.", Category::Trusting),
            QuizOption::new("I try to understand everyone’s side first.", Category::Being),
            QuizOption::new("I make peace, even if it costs me.", Category::Flowing),
        ],
    ),
    Question::new(
        "When I succeed at something",
        [
            QuizOption::new("I think about how to use it to help others.", Category::Flowing),
            QuizOption::new("I make a new goal to keep going.", Category::Trusting),
            QuizOption::new("I ask myself what this says about me.", Category::Being),
        ],
    ),
    Question::new(
        "When change is coming",
        [
            QuizOption::new("I look for the lesson in it.", Category::Being),
            QuizOption::new("I go along and help others feel okay.", Category::Flowing),
            QuizOption::new("I plan ahead for what might happen.", Category::Trusting),
        ],
    ),
    Question::new(
        "My thoughts when I’m stressed",
        [
            QuizOption::new("“I need to take control right now.”", Category::Trusting),
            QuizOption::new("“Why am I like this? I should know better.”", Category::Being),
            QuizOption::new("“I can fix this if I keep trying.”", Category::Flowing),
        ],
    ),
    Question::new(
        "Deep down, when things are hard",
        [
            QuizOption::new("I feel worried until everyone else is okay.", Category::Flowing),
            QuizOption::new("I feel tight and under pressure to hold things together.", Category::Trusting),
            QuizOption::new("I feel sad or ashamed I can’t fix it.", Category::Being),
        ],
    ),
];
