use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::goal::GoalRow;
use crate::models::user::UserId;

/// Returns all goals for a user, newest first.
pub async fn get_goals(pool: &PgPool, user_id: UserId) -> Result<Vec<GoalRow>> {
    Ok(sqlx::query_as::<_, GoalRow>(
        r#"
        SELECT id, user_id, title, description, created_at, end_date
        FROM goals
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Returns one goal if it belongs to the user.
pub async fn get_goal(pool: &PgPool, user_id: UserId, goal_id: Uuid) -> Result<Option<GoalRow>> {
    Ok(sqlx::query_as::<_, GoalRow>(
        r#"
        SELECT id, user_id, title, description, created_at, end_date
        FROM goals
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(goal_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}
