//! Form module - one engine for every multi-section form.
//!
//! Sections are plain data (`SectionSchema`): fields with render hints plus
//! ordered presence rules. `FormState` holds values, `SectionCursor` tracks
//! the active section, and `validate_section` reports the first unmet rule.

mod field;
mod schema;
mod form_state;
mod validator;
mod cursor;
mod variant;

pub use field::{ChoiceSpec, FieldKind, FieldSpec, FieldValue};
pub use schema::SectionSchema;
pub use form_state::FormState;
pub use validator::{validate_all, validate_section, Rule, SectionIncomplete, ValidationContext};
pub use cursor::SectionCursor;
pub use variant::{fields, FormVariant};
