pub mod handlers;
pub mod progress;
pub mod queries;
