use serde::{Deserialize, Serialize};

use crate::common::server_error::ServerError;

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Validated fields of a question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: serde_json::Number,
}

impl CreateQuestionRequest {
    pub fn validate(self) -> Result<NewQuestion, ServerError> {
        let question = self.question.trim();
        let answer = self.answer.trim();

        if question.is_empty() {
            return Err(ServerError::Validation("Question text is required".into()));
        }

        if answer.is_empty() {
            return Err(ServerError::Validation("Answer text is required".into()));
        }

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(ServerError::Validation(format!(
                "Difficulty must be between {} and {}, got {}",
                MIN_DIFFICULTY, MAX_DIFFICULTY, self.difficulty
            )));
        }

        let category = self
            .category
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .ok_or_else(|| {
                ServerError::NotFound(format!("Category with id {} does not exist", self.category))
            })?;

        Ok(NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty: self.difficulty,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: String,
}

/// Escapes `LIKE` wildcards so the term is matched literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
