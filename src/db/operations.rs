use async_trait::async_trait;
use sqlx::{Connection, PgConnection};
use tracing::{debug, error};

use crate::db::models::User;
use crate::error::{AppError, DatabaseError};
use crate::Result;

const SELECT_USERS: &str = "SELECT id, name, email FROM users;";

/// Read access to the `users` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every row of the table, in the order the database returns them.
    async fn fetch_all(&self) -> Result<Vec<User>>;
}

/// `UserStore` backed by PostgreSQL, opening one connection per call.
pub struct PgUserStore {
    url: String,
}

impl PgUserStore {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn connect(&self) -> Result<PgConnection> {
        PgConnection::connect(&self.url).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            match e {
                e @ sqlx::Error::Configuration(_) => e.into(),
                e => AppError::DatabaseError(DatabaseError::ConnectionError(e.to_string())),
            }
        })
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn fetch_all(&self) -> Result<Vec<User>> {
        let mut conn = self.connect().await?;

        // On error `conn` is dropped here, which closes the socket.
        let users = match sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&mut conn)
            .await
        {
            Ok(users) => users,
            Err(e) => {
                error!("Failed to fetch users: {}", e);
                return Err(e.into());
            }
        };

        if let Err(e) = conn.close().await {
            // Rows are already fetched; a close failure does not fail the call.
            debug!("Error while closing database connection: {}", e);
        }

        debug!("Fetched {} users", users.len());
        Ok(users)
    }
}
