#[cfg(test)]
mod tests {
    use std::env;

    use dotenv::dotenv;
    use sqlx::{Pool, Postgres};
    use tokio::sync::OnceCell;
    use uuid::Uuid;

    use crate::{
        category::models::CategorySelector,
        common::app_state::AppState,
        question::{db as question_db, models::Question},
        quiz::{engine::QuizEngine, models::QuizTurn},
        store::{QuestionStore, StoreError, pg_store::PgStore},
        tests::setup::{new_question, setup_logging},
    };

    static SCHEMA: OnceCell<()> = OnceCell::const_new();

    fn connection_string() -> String {
        dotenv().ok();
        env::var("TRIVIA__DATABASE_URL").expect("Failed to obtain connection string")
    }

    async fn setup_pool() -> Pool<Postgres> {
        setup_logging();
        let pool = Pool::<Postgres>::connect(&connection_string())
            .await
            .unwrap();

        SCHEMA
            .get_or_init(|| async {
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS "categories" (
                        id SERIAL PRIMARY KEY,
                        type TEXT NOT NULL
                    )
                    "#,
                )
                .execute(&pool)
                .await
                .unwrap();

                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS "questions" (
                        id SERIAL PRIMARY KEY,
                        question TEXT NOT NULL,
                        answer TEXT NOT NULL,
                        difficulty INTEGER NOT NULL,
                        category INTEGER NOT NULL REFERENCES "categories"(id)
                    )
                    "#,
                )
                .execute(&pool)
                .await
                .unwrap();
            })
            .await;

        pool
    }

    /// Fresh category so concurrent runs do not see each other's rows.
    async fn create_category(pool: &Pool<Postgres>) -> i32 {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO "categories" (type)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(format!("test {}", Uuid::new_v4()))
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn count_with_text(pool: &Pool<Postgres>, text: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "questions" WHERE question = $1"#)
            .bind(text)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "needs TRIVIA__DATABASE_URL"]
    async fn search_matches_wildcards_literally() {
        let pool = setup_pool().await;
        let state = AppState::from_connection_string(&connection_string())
            .await
            .unwrap();
        let category = create_category(&pool).await;
        let tag = Uuid::new_v4().simple().to_string();
        let store = state.get_questions();

        let percent = store
            .insert(new_question(category, &format!("{tag} 100% sure")))
            .await
            .unwrap();
        let thousand = store
            .insert(new_question(category, &format!("{tag} 1000 points")))
            .await
            .unwrap();
        let underscore = store
            .insert(new_question(category, &format!("{tag} a_b")))
            .await
            .unwrap();
        let letter = store
            .insert(new_question(category, &format!("{tag} AXB")))
            .await
            .unwrap();

        let ids = |found: Vec<Question>| -> Vec<i32> {
            found.into_iter().map(|q| q.id).collect()
        };

        let found = ids(store.search(&format!("{tag} 100%")).await.unwrap());
        assert_eq!(found, vec![percent.id]);
        assert!(!found.contains(&thousand.id));

        let term = format!("{} A_B", tag.to_uppercase());
        let found = ids(store.search(&term).await.unwrap());
        assert_eq!(found, vec![underscore.id]);
        assert!(!found.contains(&letter.id));

        let found = ids(store.search(&format!("{tag} a")).await.unwrap());
        assert_eq!(found, vec![underscore.id, letter.id]);
    }

    #[tokio::test]
    #[ignore = "needs TRIVIA__DATABASE_URL"]
    async fn insert_into_unknown_category_writes_nothing() {
        let pool = setup_pool().await;
        let store = PgStore::new(pool.clone());
        let text = format!("orphan {}", Uuid::new_v4());

        let result = store.insert(new_question(i32::MAX, &text)).await;

        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert_eq!(count_with_text(&pool, &text).await, 0);
    }

    #[tokio::test]
    #[ignore = "needs TRIVIA__DATABASE_URL"]
    async fn delete_missing_question_is_not_found() {
        let pool = setup_pool().await;
        let store = PgStore::new(pool.clone());
        let category = create_category(&pool).await;
        let text = format!("short lived {}", Uuid::new_v4());
        let question = store.insert(new_question(category, &text)).await.unwrap();

        store.delete(question.id).await.unwrap();
        assert_eq!(count_with_text(&pool, &text).await, 0);

        let result = store.delete(question.id).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));

        let result = store.delete(i32::MAX).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    #[ignore = "needs TRIVIA__DATABASE_URL"]
    async fn list_by_category_filters_on_selector() {
        let pool = setup_pool().await;
        let store = PgStore::new(pool.clone());
        let first = create_category(&pool).await;
        let second = create_category(&pool).await;

        let a = store.insert(new_question(first, "first a")).await.unwrap();
        let b = store.insert(new_question(first, "first b")).await.unwrap();
        let c = store.insert(new_question(second, "second c")).await.unwrap();

        let in_first =
            question_db::list_questions_by_category(&pool, CategorySelector::Category(first))
                .await
                .unwrap();
        assert_eq!(in_first, vec![a.clone(), b.clone()]);

        let any = question_db::list_questions_by_category(&pool, CategorySelector::Any)
            .await
            .unwrap();
        for question in [&a, &b, &c] {
            assert!(any.contains(question));
        }
        assert!(any.windows(2).all(|pair| pair[0].id < pair[1].id));
        assert!(any.iter().any(|q| q.category != first));
    }

    #[tokio::test]
    #[ignore = "needs TRIVIA__DATABASE_URL"]
    async fn page_reads_rows_and_total_together() {
        let pool = setup_pool().await;
        let store = PgStore::new(pool.clone());
        let category = create_category(&pool).await;
        store.insert(new_question(category, "paged")).await.unwrap();

        let (page, total) = store.page(0, 5).await.unwrap();

        assert!(!page.is_empty() && page.len() <= 5);
        assert!(total >= page.len() as i64);
        assert!(page.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[tokio::test]
    #[ignore = "needs TRIVIA__DATABASE_URL"]
    async fn quiz_draws_from_postgres_pool() {
        let pool = setup_pool().await;
        let store = PgStore::new(pool.clone());
        let category = create_category(&pool).await;
        let a = store.insert(new_question(category, "quiz a")).await.unwrap();
        let b = store.insert(new_question(category, "quiz b")).await.unwrap();
        let engine = QuizEngine::new(5);

        let turn = engine
            .next_question(
                &store,
                &store,
                &[a.id],
                CategorySelector::Category(category),
            )
            .await
            .unwrap();

        assert_eq!(turn, QuizTurn::Question(b));
    }
}
