//! Taskwise server entry point.
//!
//! Loads configuration, initialises tracing, wires adapters into the
//! services (`PostgreSQL`-backed repositories when `DATABASE_URL` is set
//! and the `postgres` feature is compiled in, in-memory otherwise), and
//! serves the API with graceful shutdown on ctrl-c.

use std::sync::Arc;

use mockable::DefaultClock;
use taskwise::api::routes::create_router;
use taskwise::api::state::AppState;
use taskwise::auth::adapters::memory::InMemoryUserRepository;
use taskwise::auth::ports::UserRepository;
use taskwise::auth::services::AuthService;
use taskwise::config::AppConfig;
use taskwise::task::adapters::gemini::GeminiSuggestionEngine;
use taskwise::task::adapters::memory::InMemoryTaskRepository;
use taskwise::task::ports::TaskRepository;
use taskwise::task::services::TaskLifecycleService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,taskwise=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let clock = Arc::new(DefaultClock);

    let (users, tasks) = build_repositories(&config)?;
    let engine = Arc::new(GeminiSuggestionEngine::new(&config.gemini)?);
    let auth = AuthService::new(
        users,
        clock.clone(),
        config.jwt_secret.clone(),
        chrono::Duration::seconds(config.token_ttl_secs),
    );
    let lifecycle = TaskLifecycleService::new(tasks, engine, clock);
    let state = AppState::new(Arc::new(auth), Arc::new(lifecycle));

    let app = create_router(state).layer(TraceLayer::new_for_http());
    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Taskwise listening on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Taskwise stopped");
    Ok(())
}

#[cfg(feature = "postgres")]
fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<dyn UserRepository>, Arc<dyn TaskRepository>), BoxError> {
    use diesel::r2d2::{ConnectionManager, Pool};
    use taskwise::auth::adapters::postgres::PostgresUserRepository;
    use taskwise::task::adapters::postgres::PostgresTaskRepository;

    if let Some(url) = &config.database_url {
        let manager = ConnectionManager::<diesel::pg::PgConnection>::new(url);
        let pool = Pool::builder().build(manager)?;
        tracing::info!("using PostgreSQL-backed repositories");
        return Ok((
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresTaskRepository::new(pool)),
        ));
    }

    tracing::info!("DATABASE_URL not set; using in-memory repositories");
    Ok(in_memory_repositories())
}

#[cfg(not(feature = "postgres"))]
fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<dyn UserRepository>, Arc<dyn TaskRepository>), BoxError> {
    if config.database_url.is_some() {
        tracing::warn!(
            "DATABASE_URL is set but this build lacks the postgres feature; using in-memory repositories"
        );
    } else {
        tracing::info!("using in-memory repositories");
    }
    Ok(in_memory_repositories())
}

fn in_memory_repositories() -> (Arc<dyn UserRepository>, Arc<dyn TaskRepository>) {
    (
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryTaskRepository::new()),
    )
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(error) => tracing::error!("failed to listen for shutdown signal: {error}"),
    }
}
