use sqlx::PgPool;

use crate::streak::tracker::StreakTracker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Streak tracker over a pluggable `StreakStore`. Default: `PgStreakStore` on `db`.
    pub streaks: StreakTracker,
}
