// ABOUTME: Domain types for categories and trivia questions
// ABOUTME: Shapes serialized on the wire and passed between store and handlers

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A labeled grouping for questions, e.g. "Science"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A trivia prompt with its answer, difficulty, and category reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Validated input for inserting a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCreateInput {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Raw create-question body as submitted by clients.
///
/// Every field is optional so that a missing field surfaces as a validation
/// error rather than a body rejection. `category` and `difficulty` may be sent
/// either as numbers or as numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_category_serializes_type_key() {
        let category = Category {
            id: 1,
            kind: "Science".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            json!({"id": 1, "type": "Science"})
        );
    }

    #[test]
    fn test_question_serializes_all_fields() {
        let question = Question {
            id: 7,
            question: "What is H2O?".to_string(),
            answer: "Water".to_string(),
            category: 1,
            difficulty: 2,
        };
        assert_eq!(
            serde_json::to_value(&question).unwrap(),
            json!({
                "id": 7,
                "question": "What is H2O?",
                "answer": "Water",
                "category": 1,
                "difficulty": 2
            })
        );
    }

    #[test]
    fn test_draft_tolerates_missing_fields() {
        let draft: QuestionDraft = serde_json::from_value(json!({})).unwrap();
        assert!(draft.question.is_none());
        assert!(draft.answer.is_none());
        assert!(draft.category.is_none());
        assert!(draft.difficulty.is_none());
    }
}
