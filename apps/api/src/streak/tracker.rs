use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::errors::AppError;
use crate::models::user::UserId;
use crate::streak::store::StreakStore;
use crate::streak::transition::{StreakChange, StreakState};

/// Result of applying one entry event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakUpdate {
    pub change: StreakChange,
    #[serde(flatten)]
    pub state: StreakState,
}

/// Drives each user's streak from entry-creation events.
#[derive(Clone)]
pub struct StreakTracker {
    store: Arc<dyn StreakStore>,
    max_attempts: u32,
}

impl StreakTracker {
    pub fn new(store: Arc<dyn StreakStore>, max_attempts: u32) -> Self {
        Self {
            store,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Applies an entry created at `entry_at` to the user's streak.
    ///
    /// Read-transition-CAS, retried from a fresh read when a concurrent writer
    /// wins. Unchanged states (backfills) are not written.
    pub async fn update(
        &self,
        user_id: UserId,
        entry_at: DateTime<Utc>,
    ) -> Result<StreakUpdate, AppError> {
        for attempt in 1..=self.max_attempts {
            let current = self.store.load_or_init(user_id).await?;
            let (next, change) = current.state.apply_entry(entry_at);

            if next == current.state {
                debug!("Streak for user {user_id} unchanged ({change:?})");
                return Ok(StreakUpdate { change, state: next });
            }

            if self
                .store
                .compare_and_swap(user_id, current.version, &next)
                .await?
            {
                debug!(
                    "Streak for user {user_id}: {change:?} -> current {} longest {}",
                    next.current_streak, next.longest_streak
                );
                return Ok(StreakUpdate { change, state: next });
            }

            warn!(
                "Streak write conflict for user {user_id} (attempt {attempt}/{})",
                self.max_attempts
            );
        }

        Err(AppError::Conflict(format!(
            "streak update for user {user_id} lost {} consecutive write races",
            self.max_attempts
        )))
    }

    /// Best-effort wrapper for the entry-creation path: failures are logged
    /// and swallowed so they never fail the entry itself.
    pub async fn record_entry(
        &self,
        user_id: UserId,
        entry_at: DateTime<Utc>,
    ) -> Option<StreakUpdate> {
        match self.update(user_id, entry_at).await {
            Ok(update) => Some(update),
            Err(e) => {
                error!("Failed to update streak for user {user_id} at {entry_at}: {e}");
                None
            }
        }
    }

    /// Current streak as stored, initializing the profile row if needed.
    pub async fn current(&self, user_id: UserId) -> Result<StreakState, AppError> {
        Ok(self.store.load_or_init(user_id).await?.state)
    }
}
