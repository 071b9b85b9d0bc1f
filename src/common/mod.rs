pub mod app_state;
pub mod models;
pub mod server_error;
