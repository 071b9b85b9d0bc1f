use async_trait::async_trait;

use crate::{
    category::models::{Category, CategorySelector},
    question::models::{NewQuestion, Question},
};

#[cfg(test)]
pub mod memory_store;
pub mod pg_store;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store lock poisoned: {0}")]
    Poisoned(String),
}

/// Question records, each tagged with a category.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn list_by_category(
        &self,
        selector: CategorySelector,
    ) -> Result<Vec<Question>, StoreError>;

    async fn get(&self, question_id: i32) -> Result<Option<Question>, StoreError>;

    /// Fails with `StoreError::NotFound` when no question has the id.
    async fn delete(&self, question_id: i32) -> Result<(), StoreError>;

    /// Fails with `StoreError::NotFound` when the category does not exist.
    /// Nothing is written in that case.
    async fn insert(&self, new_question: NewQuestion) -> Result<Question, StoreError>;

    /// One page of questions ordered by id, together with the total number
    /// of questions. Both come from the same snapshot.
    async fn page(&self, offset: i64, limit: i64) -> Result<(Vec<Question>, i64), StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    /// Case-insensitive substring match on the question text.
    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait CategoryRegistry: Send + Sync {
    async fn get(&self, category_id: i32) -> Result<Option<Category>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Category>, StoreError>;
}
