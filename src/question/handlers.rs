use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde_json::json;
use tracing::{debug, info};

use crate::{
    common::{
        app_state::AppState,
        models::{QuestionListResponse, to_category_map},
        server_error::ServerError,
    },
    question::models::{CreateQuestionRequest, PageQuery, SearchRequest},
};

pub fn question_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_question_page).post(create_question))
        .route("/search", post(search_questions))
        .route("/{question_id}", delete(delete_question))
        .with_state(state)
}

async fn get_question_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ServerError> {
    let page = query.page.unwrap_or(1);
    if page < 1 {
        return Err(ServerError::BadRequest(format!(
            "Page must be 1 or greater, got {}",
            page
        )));
    }

    let page_size = state.get_page_size() as i64;
    let offset = (page - 1).saturating_mul(page_size);
    let (questions, total) = state.get_questions().page(offset, page_size).await?;
    let categories = state.get_categories().list_all().await?;
    debug!("Page {} returned {} of {} questions", page, questions.len(), total);

    let response =
        QuestionListResponse::new(questions, total).with_categories(to_category_map(categories));

    Ok((StatusCode::OK, Json(response)))
}

async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let new_question = request.validate()?;
    let question = state.get_questions().insert(new_question).await?;
    info!("Question {} created in category {}", question.id, question.category);

    Ok((StatusCode::CREATED, Json(json!({ "question": question }))))
}

async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(question_id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    // Ids outside the INTEGER column cannot exist
    let question_id = question_id.parse::<i32>().map_err(|_| {
        ServerError::NotFound(format!("Question with id {} does not exist", question_id))
    })?;

    state.get_questions().delete(question_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn search_questions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let questions = state.get_questions().search(&request.search_term).await?;
    let total = questions.len() as i64;
    debug!("Search '{}' matched {} questions", request.search_term, total);

    Ok((StatusCode::OK, Json(QuestionListResponse::new(questions, total))))
}
