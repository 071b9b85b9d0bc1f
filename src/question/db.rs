use sqlx::{PgExecutor, Pool, Postgres, Transaction};
use tracing::error;

use crate::{
    category::models::CategorySelector,
    question::models::{NewQuestion, Question, escape_like},
    store::StoreError,
};

pub async fn get_question_by_id(
    pool: &Pool<Postgres>,
    question_id: i32,
) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE id = $1
        "#,
    )
    .bind(question_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_questions_by_category(
    pool: &Pool<Postgres>,
    selector: CategorySelector,
) -> Result<Vec<Question>, sqlx::Error> {
    let category_id = match selector {
        CategorySelector::Any => None,
        CategorySelector::Category(id) => Some(id),
    };

    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE $1::INTEGER IS NULL OR category = $1
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await
}

pub async fn get_question_page<'e>(
    executor: impl PgExecutor<'e>,
    offset: i64,
    limit: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn count_questions<'e>(executor: impl PgExecutor<'e>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "questions""#)
        .fetch_one(executor)
        .await
}

pub async fn search_questions(
    pool: &Pool<Postgres>,
    term: &str,
) -> Result<Vec<Question>, sqlx::Error> {
    let pattern = format!("%{}%", escape_like(term));

    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE question ILIKE $1 ESCAPE '\'
        ORDER BY id
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await
}

pub async fn tx_insert_question(
    tx: &mut Transaction<'_, Postgres>,
    new_question: &NewQuestion,
) -> Result<Question, StoreError> {
    let category_exists = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT id FROM "categories"
        WHERE id = $1
        FOR SHARE
        "#,
    )
    .bind(new_question.category)
    .fetch_optional(&mut **tx)
    .await?
    .is_some();

    if !category_exists {
        return Err(StoreError::NotFound(format!(
            "Category with id {} does not exist",
            new_question.category
        )));
    }

    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO "questions" (question, answer, category, difficulty)
        VALUES ($1, $2, $3, $4)
        RETURNING id, question, answer, category, difficulty
        "#,
    )
    .bind(&new_question.question)
    .bind(&new_question.answer)
    .bind(new_question.category)
    .bind(new_question.difficulty)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| {
        error!("Failed to insert question: {}", e);
        e
    })?;

    Ok(question)
}

pub async fn tx_delete_question(
    tx: &mut Transaction<'_, Postgres>,
    question_id: i32,
) -> Result<(), StoreError> {
    let row = sqlx::query(
        r#"
        DELETE FROM "questions"
        WHERE id = $1
        "#,
    )
    .bind(question_id)
    .execute(&mut **tx)
    .await?;

    if row.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!(
            "Question with id {} does not exist",
            question_id
        )));
    }

    Ok(())
}
