//! Quiz module - question bank, scoring, and flight direction profiles.
//!
//! - `Category` - the three inner movements
//! - `QuestionBank` - fixed ordered questions with one option per category
//! - `QuizAnswers` / `AnswerRecord` - selections and their submit-time records
//! - `compute_flight_direction` - tally and tie-break classification
//! - `lookup_profile` - static profile prose per `ResultCode`
//! - `render_results` - the results card as text

mod category;
mod question_bank;
mod answers;
mod result_code;
mod scorer;
mod profile;
mod results;

pub use category::Category;
pub use question_bank::{Question, QuestionBank, QuizOption};
pub use answers::{AnswerRecord, QuizAnswers};
pub use result_code::ResultCode;
pub use scorer::{compute_flight_direction, FlightDirection, ScoreTally};
pub use profile::{lookup_profile, lookup_profile_str, Profile, ProfileLookup, MISSING_PROFILE_MESSAGE};
pub use results::{render_results, QuizResults};
