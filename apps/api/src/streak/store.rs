//! Streak persistence — the record-store seam for `StreakTracker`.
//!
//! Writes are optimistic compare-and-swap on `user_profiles.streak_version`,
//! so two concurrent entry creations for the same user serialize instead of
//! overwriting each other. `AppState` carries the store as `Arc<dyn StreakStore>`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::{UserId, UserProfileRow};
use crate::streak::transition::StreakState;

/// A streak state together with the row version it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedStreak {
    pub state: StreakState,
    pub version: i64,
}

impl From<UserProfileRow> for VersionedStreak {
    fn from(row: UserProfileRow) -> Self {
        VersionedStreak {
            state: StreakState {
                current_streak: row.current_streak,
                longest_streak: row.longest_streak,
                last_entry_date: row.last_entry_date,
            },
            version: row.streak_version,
        }
    }
}

#[async_trait]
pub trait StreakStore: Send + Sync {
    /// Reads the user's streak, creating the `(0, 0, null)` profile row first
    /// if the user has none.
    async fn load_or_init(&self, user_id: UserId) -> Result<VersionedStreak, AppError>;

    /// Stores `next` only if the row is still at `expected_version`.
    /// Returns `false` when another writer got there first.
    async fn compare_and_swap(
        &self,
        user_id: UserId,
        expected_version: i64,
        next: &StreakState,
    ) -> Result<bool, AppError>;
}

/// Postgres-backed store over the `user_profiles` table.
pub struct PgStreakStore {
    pool: PgPool,
}

impl PgStreakStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StreakStore for PgStreakStore {
    async fn load_or_init(&self, user_id: UserId) -> Result<VersionedStreak, AppError> {
        sqlx::query("INSERT INTO user_profiles (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        let row: UserProfileRow = sqlx::query_as(
            r#"
            SELECT user_id, current_streak, longest_streak, last_entry_date,
                   streak_version, created_at, updated_at
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn compare_and_swap(
        &self,
        user_id: UserId,
        expected_version: i64,
        next: &StreakState,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE user_profiles
            SET current_streak = $1,
                longest_streak = $2,
                last_entry_date = $3,
                streak_version = streak_version + 1,
                updated_at = NOW()
            WHERE user_id = $4 AND streak_version = $5
            "#,
        )
        .bind(next.current_streak)
        .bind(next.longest_streak)
        .bind(next.last_entry_date)
        .bind(user_id)
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
