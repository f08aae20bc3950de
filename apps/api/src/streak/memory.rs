use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::user::UserId;
use crate::streak::store::{StreakStore, VersionedStreak};
use crate::streak::transition::StreakState;

/// In-process store with the same version-checked write semantics as
/// `PgStreakStore`.
#[derive(Default)]
pub struct InMemoryStreakStore {
    rows: Mutex<HashMap<UserId, VersionedStreak>>,
}

#[async_trait]
impl StreakStore for InMemoryStreakStore {
    async fn load_or_init(&self, user_id: UserId) -> Result<VersionedStreak, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(*rows.entry(user_id).or_insert(VersionedStreak {
            state: StreakState::default(),
            version: 0,
        }))
    }

    async fn compare_and_swap(
        &self,
        user_id: UserId,
        expected_version: i64,
        next: &StreakState,
    ) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&user_id) {
            Some(row) if row.version == expected_version => {
                row.state = *next;
                row.version += 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
