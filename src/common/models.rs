use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::models::Category;

/// Categories as the `{"<id>": "<label>"}` map clients render directly.
pub type CategoryMap = BTreeMap<i32, String>;

pub fn to_category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.label)).collect()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse<T> {
    pub questions: Vec<T>,
    pub total_questions: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<String>,
}

impl<T> QuestionListResponse<T> {
    pub fn new(questions: Vec<T>, total_questions: i64) -> Self {
        Self {
            questions,
            total_questions,
            categories: None,
            current_category: None,
        }
    }

    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_current_category(mut self, label: impl Into<String>) -> Self {
        self.current_category = Some(label.into());
        self
    }
}
