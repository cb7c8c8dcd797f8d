use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::db::User;
use crate::{AppState, Result};

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// Liveness probe. Never touches the database.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello, CI/CD!" }))
}

/// Lists every user. Store failures are returned as-is and rendered by `AppError`.
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.users.fetch_all().await {
        Ok(users) => {
            info!("Returning {} users", users.len());
            Ok(HttpResponse::Ok().json(UsersResponse { users }))
        }
        Err(e) => {
            error!("Listing users failed: {}", e);
            Err(e)
        }
    }
}
