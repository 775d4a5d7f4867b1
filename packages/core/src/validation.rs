// ABOUTME: Input validation for question creation
// ABOUTME: Turns a raw client draft into a checked QuestionCreateInput

use serde_json::Value;
use thiserror::Error;

use crate::types::{QuestionCreateInput, QuestionDraft};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),
    #[error("Field must be an integer: {0}")]
    NotAnInteger(&'static str),
    #[error("Field must be a string: {0}")]
    NotAString(&'static str),
}

/// Validate a create-question draft. All four fields are required and non-empty.
pub fn validate_question_draft(
    draft: &QuestionDraft,
) -> Result<QuestionCreateInput, ValidationError> {
    let question = required_text(draft.question.as_ref(), "question")?;
    let answer = required_text(draft.answer.as_ref(), "answer")?;
    let difficulty = parse_integer_field(draft.difficulty.as_ref(), "difficulty")?;
    let category = parse_integer_field(draft.category.as_ref(), "category")?;

    Ok(QuestionCreateInput {
        question,
        answer,
        category,
        difficulty,
    })
}

fn required_text(value: Option<&Value>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::EmptyField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::NotAString(field)),
    }
}

/// Read an integer that may arrive as a JSON number or a numeric string
pub fn parse_integer_field(
    value: Option<&Value>,
    field: &'static str,
) -> Result<i64, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::Number(n)) => n.as_i64().ok_or(ValidationError::NotAnInteger(field)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::EmptyField(field)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::NotAnInteger(field)),
        Some(_) => Err(ValidationError::NotAnInteger(field)),
    }
}
