use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::UserId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GoalRow {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Editable after creation; may be missing or earlier than `created_at`.
    pub end_date: Option<DateTime<Utc>>,
}
