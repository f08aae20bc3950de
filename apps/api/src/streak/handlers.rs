use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::day_boundary::days_between;
use crate::errors::AppError;
use crate::models::user::{UserId, UserIdQuery};
use crate::state::AppState;
use crate::streak::transition::StreakState;

/// Streak as shown to the user. `current_streak` is the stored value;
/// `is_active` is false once a full calendar day has passed without an entry.
#[derive(Debug, Serialize)]
pub struct StreakSummary {
    pub user_id: UserId,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_entry_date: Option<DateTime<Utc>>,
    pub days_since_last_entry: Option<i64>,
    pub is_active: bool,
}

impl StreakSummary {
    pub fn new(user_id: UserId, state: StreakState, now: DateTime<Utc>) -> Self {
        StreakSummary {
            user_id,
            current_streak: state.current_streak,
            longest_streak: state.longest_streak,
            last_entry_date: state.last_entry_date,
            days_since_last_entry: state.last_entry_date.map(|last| days_between(last, now)),
            is_active: state.is_active(now),
        }
    }
}

/// GET /api/v1/profile/streak
pub async fn handle_get_streak(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<StreakSummary>, AppError> {
    let streak = state.streaks.current(params.user_id).await?;
    Ok(Json(StreakSummary::new(params.user_id, streak, Utc::now())))
}
