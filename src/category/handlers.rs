use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::debug;

use crate::{
    category::models::CategorySelector,
    common::{
        app_state::AppState,
        models::{QuestionListResponse, to_category_map},
        server_error::ServerError,
    },
    question::models::Question,
};

pub fn category_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_categories))
        .route("/{category_id}/questions", get(get_questions_by_category))
        .with_state(state)
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let categories = state.get_categories().list_all().await?;
    let categories = to_category_map(categories);

    Ok((StatusCode::OK, Json(json!({ "categories": categories }))))
}

async fn get_questions_by_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, ServerError> {
    let Some(category) = state.get_categories().get(category_id).await? else {
        debug!("Category {} requested but does not exist", category_id);
        return Err(ServerError::NotFound(format!(
            "Category with id {} does not exist",
            category_id
        )));
    };

    let questions: Vec<Question> = state
        .get_questions()
        .list_by_category(CategorySelector::Category(category.id))
        .await?;

    let total = questions.len() as i64;
    let response =
        QuestionListResponse::new(questions, total).with_current_category(category.label);

    Ok((StatusCode::OK, Json(response)))
}
