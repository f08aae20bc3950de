pub mod entry;
pub mod goal;
pub mod user;
