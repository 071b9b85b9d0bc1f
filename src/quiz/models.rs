use serde::{Deserialize, Serialize};

use crate::{category::models::CategorySelector, question::models::Question};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizCategory {
    pub id: i32,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

impl QuizRequest {
    pub fn selector(&self) -> CategorySelector {
        CategorySelector::from_id(self.quiz_category.id)
    }
}

/// `question` is `null` once the session has ended.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizResponse {
    pub question: Option<Question>,
}

/// Outcome of asking for the next question of a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizTurn {
    Question(Question),
    SessionEnd,
}

impl QuizTurn {
    pub fn is_end(&self) -> bool {
        matches!(self, QuizTurn::SessionEnd)
    }
}

impl From<QuizTurn> for QuizResponse {
    fn from(turn: QuizTurn) -> Self {
        match turn {
            QuizTurn::Question(question) => QuizResponse {
                question: Some(question),
            },
            QuizTurn::SessionEnd => QuizResponse { question: None },
        }
    }
}
