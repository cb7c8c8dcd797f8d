use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use users_api::{api, AppError, AppState, Settings};

#[actix_web::main]
async fn main() -> users_api::Result<()> {
    // Load environment variables
    dotenv().ok();

    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Settings::new()?;
    info!("Configuration loaded ({} environment)", config.environment);
    info!("Using database {}", config.database.redacted_url());

    let state = web::Data::new(AppState::from_settings(&config));

    let listener = TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))?;
    info!("Listening on http://{}:{}", config.server.host, config.server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .listen(listener)?
    .workers(config.server.workers as usize)
    .run()
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}
