use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use starter_deck::adapters::events::{ChangeFeed, ChangeLogger, EventDispatcher};
use starter_deck::adapters::http::{api_router, ApiState};
use starter_deck::adapters::sqlite::{self, SqliteQuestionRepository};
use starter_deck::application::handlers::{SeedDefaultsCommand, SeedDefaultsHandler, SeedOutcome};
use starter_deck::config::{AppConfig, LogFormat, ServerConfig};
use starter_deck::domain::question::DECK_EVENT_TYPES;
use starter_deck::ports::{EventPublisher, EventSubscriber, QuestionRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config.server);
    config.validate().context("validating configuration")?;

    info!(
        environment = ?config.server.environment,
        database = %config.database.url,
        "Starting starter-deck"
    );

    let pool = sqlite::connect(&config.database)
        .await
        .context("opening database")?;
    if config.database.run_migrations {
        sqlite::migrate(&pool).await.context("running migrations")?;
    }

    let repository: Arc<dyn QuestionRepository> = Arc::new(SqliteQuestionRepository::new(pool));

    let bus = Arc::new(EventDispatcher::new());
    let change_feed = ChangeFeed::default();
    bus.subscribe_all(&DECK_EVENT_TYPES, Arc::new(ChangeLogger));
    bus.subscribe_all(&DECK_EVENT_TYPES, Arc::new(change_feed.clone()));
    let event_publisher: Arc<dyn EventPublisher> = bus;

    if config.features.seed_defaults {
        let outcome = SeedDefaultsHandler::new(repository.clone(), event_publisher.clone())
            .handle(SeedDefaultsCommand::default())
            .await
            .context("seeding default questions")?;
        if outcome == SeedOutcome::AlreadyPopulated {
            info!("Existing deck found");
        }
    }

    let app = api_router(ApiState {
        repository: repository.clone(),
        event_publisher,
        change_feed,
        verbose_errors: config.features.verbose_errors,
    })
    .layer(TimeoutLayer::new(config.server.request_timeout()))
    .layer(cors_layer(&config.server))
    .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    if let Err(e) = repository.save().await {
        tracing::warn!(error = %e, "Failed to save deck on shutdown");
    }
    info!("Shut down");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    if origins.is_empty() {
        return if server.is_production() {
            CorsLayer::new()
        } else {
            CorsLayer::permissive()
        };
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
