use std::sync::Arc;

use axum::{Router, middleware::from_fn};
use dotenv::dotenv;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

use crate::{
    category::handlers::category_routes, common::app_state::AppState, config::config::CONFIG,
    health::handlers::health_routes, mw::request_mw::request_mw,
    question::handlers::question_routes, quiz::handlers::quiz_routes,
};

mod category;
mod common;
mod config;
mod health;
mod mw;
mod question;
mod quiz;
mod store;

#[cfg(test)]
mod tests;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/health", health_routes(state.clone()))
        .nest("/categories", category_routes(state.clone()))
        .nest("/questions", question_routes(state.clone()))
        .nest("/quizzes", quiz_routes(state))
        .layer(from_fn(request_mw))
}

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    let level = CONFIG
        .server
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::DEBUG);

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    // Initialize state
    let state = AppState::from_connection_string(&CONFIG.database_url)
        .await
        .unwrap_or_else(|e| panic!("{}", e));

    info!(
        "Quiz sessions end after {} questions, pages hold {} questions",
        state.get_engine().max_turns(),
        state.get_page_size()
    );

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .unwrap();

    info!(
        "Server listening on address: {}",
        listener.local_addr().unwrap()
    );
    axum::serve(listener, app(state)).await.unwrap();
}
