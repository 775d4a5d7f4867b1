// ABOUTME: Core types, validation, and constants for the trivia API
// ABOUTME: Foundational package shared by the storage, api, and cli packages

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{Category, Question, QuestionCreateInput, QuestionDraft};

// Re-export constants
pub use constants::{database_file, trivia_dir, QUESTIONS_PER_PAGE};

// Re-export validation
pub use validation::{parse_integer_field, validate_question_draft, ValidationError};
