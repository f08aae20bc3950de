use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::day_boundary::days_between;
use crate::errors::AppError;
use crate::models::entry::EntryRow;
use crate::models::user::UserId;
use crate::state::AppState;
use crate::streak::tracker::StreakUpdate;

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub user_id: UserId,
    pub title: Option<String>,
    pub content: String,
    /// Defaults to the time of the request.
    pub entry_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct CreateEntryResponse {
    pub entry: EntryRow,
    /// `None` when the streak could not be updated this time.
    pub streak: Option<StreakUpdate>,
}

/// POST /api/v1/entries
///
/// Inserts the entry, then applies it to the user's streak. The streak update
/// is best-effort: the entry is already committed when it runs.
pub async fn handle_create_entry(
    State(state): State<AppState>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<CreateEntryResponse>), AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    let entry_date = resolve_entry_date(req.entry_date, Utc::now())?;

    let entry: EntryRow = sqlx::query_as(
        r#"
        INSERT INTO entries (id, user_id, title, content, entry_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, title, content, entry_date, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(&req.title)
    .bind(&req.content)
    .bind(entry_date)
    .fetch_one(&state.db)
    .await?;

    info!("Created entry {} for user {}", entry.id, entry.user_id);

    let streak = state
        .streaks
        .record_entry(entry.user_id, entry.entry_date)
        .await;

    Ok((
        StatusCode::CREATED,
        Json(CreateEntryResponse { entry, streak }),
    ))
}

/// Entry instant used for storage and streak tracking. Entries dated on a
/// later UTC day than `now` are rejected: a future `last_entry_date` would
/// turn every real entry until then into a backfill.
fn resolve_entry_date(
    requested: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, AppError> {
    let Some(entry_date) = requested else {
        return Ok(now);
    };
    if days_between(now, entry_date) > 0 {
        return Err(AppError::Validation(format!(
            "entry_date {entry_date} is after the current day"
        )));
    }
    Ok(entry_date)
}
