use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::UserId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EntryRow {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: Option<String>,
    pub content: String,
    pub entry_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
