//! Database module for the users API
//!
//! Read-only access to the externally managed `users` table.

pub mod models;
pub mod operations;

pub use models::User;
pub use operations::{PgUserStore, UserStore};
