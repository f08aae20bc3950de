// Consecutive-day journaling streaks.
// The transition rules are pure (transition.rs); the tracker wraps them in a
// version-checked read-modify-write against the record store.

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod store;
pub mod tracker;
pub mod transition;
