pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::entries::handlers as entries;
use crate::goals::handlers as goals;
use crate::state::AppState;
use crate::streak::handlers as streak;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Entries: creation triggers the streak update
        .route("/api/v1/entries", post(entries::handle_create_entry))
        // Streak read path
        .route("/api/v1/profile/streak", get(streak::handle_get_streak))
        // Goals with progress computed per request
        .route("/api/v1/goals", get(goals::handle_list_goals))
        .route("/api/v1/goals/:id", get(goals::handle_get_goal))
        .with_state(state)
}
