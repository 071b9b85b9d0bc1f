use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use tracing::{debug, info};

use crate::{
    common::{app_state::AppState, server_error::ServerError},
    quiz::models::{QuizRequest, QuizResponse},
};

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(next_quiz_question))
        .with_state(state)
}

async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuizRequest>,
) -> Result<impl IntoResponse, ServerError> {
    debug!(
        "Quiz turn {} requested for category {} ({:?})",
        request.previous_questions.len() + 1,
        request.quiz_category.id,
        request.quiz_category.label
    );

    let turn = state
        .get_engine()
        .next_question(
            state.get_questions(),
            state.get_categories(),
            &request.previous_questions,
            request.selector(),
        )
        .await?;

    if turn.is_end() {
        info!(
            "Quiz session ended after {} questions",
            request.previous_questions.len()
        );
    }

    Ok((StatusCode::OK, Json(QuizResponse::from(turn))))
}
