//! HTTP surface: route table and handlers.

pub mod handlers;

use actix_web::web;

pub use handlers::{health_check, hello, list_users, UsersResponse};

/// Registers every route on an `App`. Shared by the binary and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(health_check))
        .route("/", web::get().to(hello))
        .route("/users", web::get().to(list_users));
}
