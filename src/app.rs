use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/balances", get(handlers::get_balances))
        .route("/api/balances/:site", post(handlers::set_balance))
        .route("/api/goals/open", post(handlers::open_goals))
        .route("/api/goals/close", post(handlers::close_goals))
        .route("/api/goals/click", post(handlers::click_goals))
        .route("/api/goals/:site/:kind", post(handlers::record_progress))
        .with_state(state)
}
