use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::info;

use crate::{
    category::{
        db as category_db,
        models::{Category, CategorySelector},
    },
    health::db as health_db,
    question::{
        db as question_db,
        models::{NewQuestion, Question},
    },
    store::{CategoryRegistry, QuestionStore, StoreError},
};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn list_by_category(
        &self,
        selector: CategorySelector,
    ) -> Result<Vec<Question>, StoreError> {
        let questions = question_db::list_questions_by_category(&self.pool, selector).await?;
        Ok(questions)
    }

    async fn get(&self, question_id: i32) -> Result<Option<Question>, StoreError> {
        let question = question_db::get_question_by_id(&self.pool, question_id).await?;
        Ok(question)
    }

    async fn delete(&self, question_id: i32) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        question_db::tx_delete_question(&mut tx, question_id).await?;
        tx.commit().await?;

        info!("Deleted question {}", question_id);
        Ok(())
    }

    async fn insert(&self, new_question: NewQuestion) -> Result<Question, StoreError> {
        let mut tx = self.pool.begin().await?;
        let question = question_db::tx_insert_question(&mut tx, &new_question).await?;
        tx.commit().await?;

        info!("Created question {}", question.id);
        Ok(question)
    }

    async fn page(&self, offset: i64, limit: i64) -> Result<(Vec<Question>, i64), StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let questions = question_db::get_question_page(&mut *tx, offset, limit).await?;
        let total = question_db::count_questions(&mut *tx).await?;
        tx.commit().await?;

        Ok((questions, total))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = question_db::count_questions(&self.pool).await?;
        Ok(count)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let questions = question_db::search_questions(&self.pool, term).await?;
        Ok(questions)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        health_db::health_check(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CategoryRegistry for PgStore {
    async fn get(&self, category_id: i32) -> Result<Option<Category>, StoreError> {
        let category = category_db::get_category_by_id(&self.pool, category_id).await?;
        Ok(category)
    }

    async fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        let categories = category_db::list_categories(&self.pool).await?;
        Ok(categories)
    }
}
