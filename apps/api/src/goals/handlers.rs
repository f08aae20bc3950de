use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::goals::progress::GoalProgress;
use crate::goals::queries::{get_goal, get_goals};
use crate::models::goal::GoalRow;
use crate::models::user::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GoalWithProgress {
    #[serde(flatten)]
    pub goal: GoalRow,
    pub progress: GoalProgress,
}

impl GoalWithProgress {
    pub fn at(goal: GoalRow, now: DateTime<Utc>) -> Self {
        let progress = GoalProgress::compute(goal.created_at, goal.end_date, now);
        GoalWithProgress { goal, progress }
    }
}

/// GET /api/v1/goals
pub async fn handle_list_goals(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<GoalWithProgress>>, AppError> {
    let now = Utc::now();
    let goals = get_goals(&state.db, params.user_id).await?;
    Ok(Json(
        goals
            .into_iter()
            .map(|g| GoalWithProgress::at(g, now))
            .collect(),
    ))
}

/// GET /api/v1/goals/:id
pub async fn handle_get_goal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<GoalWithProgress>, AppError> {
    let goal = get_goal(&state.db, params.user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Goal {id} not found")))?;
    Ok(Json(GoalWithProgress::at(goal, Utc::now())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserId;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_serialized_goal_carries_progress() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let goal = GoalRow {
            id: Uuid::nil(),
            user_id: UserId(Uuid::nil()),
            title: "Write every day".to_string(),
            description: None,
            created_at: created,
            end_date: Some(created + Duration::days(10)),
        };

        let json = serde_json::to_value(GoalWithProgress::at(goal, created + Duration::days(5))).unwrap();
        assert_eq!(json["title"], "Write every day");
        assert_eq!(json["progress"]["progress_percent"], 50);
        assert_eq!(json["progress"]["days_remaining"], 5);
    }
}
