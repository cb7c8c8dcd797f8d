pub mod api;
pub mod config;
pub mod db;
pub mod error;

use std::sync::Arc;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
pub use config::Settings;

pub use db::{PgUserStore, User, UserStore};

/// Application state handed to every worker's `App`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// State backed by PostgreSQL at the configured URL. No connection is
    /// opened here; each `/users` request opens its own.
    pub fn from_settings(config: &Settings) -> Self {
        Self::new(Arc::new(PgUserStore::new(config.database.url.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::operations::MockUserStore;

    #[test]
    fn test_app_state_clone_shares_store() {
        let state = AppState::new(Arc::new(MockUserStore::new()));
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.users, &cloned.users));
    }
}
