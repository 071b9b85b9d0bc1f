use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::{
    common::server_error::ServerError,
    config::config::CONFIG,
    quiz::engine::QuizEngine,
    store::{CategoryRegistry, QuestionStore, pg_store::PgStore},
};

pub struct AppState {
    questions: Arc<dyn QuestionStore>,
    categories: Arc<dyn CategoryRegistry>,
    engine: QuizEngine,
    page_size: u16,
}

impl AppState {
    pub async fn from_connection_string(connection_string: &str) -> Result<Arc<Self>, ServerError> {
        let pool = Pool::<Postgres>::connect(connection_string).await?;
        let store = Arc::new(PgStore::new(pool));

        let state = Arc::new(Self::new(
            store.clone(),
            store,
            QuizEngine::new(CONFIG.quiz.max_turns),
            CONFIG.server.page_size,
        ));

        Ok(state)
    }

    pub fn new(
        questions: Arc<dyn QuestionStore>,
        categories: Arc<dyn CategoryRegistry>,
        engine: QuizEngine,
        page_size: u16,
    ) -> Self {
        Self {
            questions,
            categories,
            engine,
            page_size,
        }
    }

    pub fn get_questions(&self) -> &dyn QuestionStore {
        self.questions.as_ref()
    }

    pub fn get_categories(&self) -> &dyn CategoryRegistry {
        self.categories.as_ref()
    }

    pub fn get_engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn get_page_size(&self) -> u16 {
        self.page_size
    }
}
