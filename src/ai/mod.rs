use crate::state::AppState;
use axum::Router;

pub mod client;
mod dto;
pub mod handlers;
mod prompts;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::transform_routes())
}
