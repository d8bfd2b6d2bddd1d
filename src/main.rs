use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{ServiceExt, body::Body};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use draftforge::application::{
    ports::{generation::ContentGenerator, time::Clock},
    services::ApplicationServices,
};
use draftforge::config::AppConfig;
use draftforge::domain::{
    blog::{BlogReadRepository, BlogWriteRepository, FeedbackRepository, VersionRepository},
    user::UserRepository,
};
use draftforge::infrastructure::{
    database,
    generation::OpenAiCompatGenerator,
    repositories::{
        PostgresBlogReadRepository, PostgresBlogWriteRepository, PostgresFeedbackRepository,
        PostgresUserRepository, PostgresVersionRepository,
    },
    time::SystemClock,
};
use draftforge::presentation::http::{routes::build_router, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let blog_write_repo: Arc<dyn BlogWriteRepository> =
        Arc::new(PostgresBlogWriteRepository::new(pool.clone()));
    let blog_read_repo: Arc<dyn BlogReadRepository> =
        Arc::new(PostgresBlogReadRepository::new(pool.clone()));
    let version_repo: Arc<dyn VersionRepository> =
        Arc::new(PostgresVersionRepository::new(pool.clone()));
    let feedback_repo: Arc<dyn FeedbackRepository> =
        Arc::new(PostgresFeedbackRepository::new(pool.clone()));

    let generator: Arc<dyn ContentGenerator> = Arc::new(OpenAiCompatGenerator::new(
        config.generation_api_key(),
        config.generation_base_url(),
        config.generation_model(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        blog_write_repo,
        blog_read_repo,
        version_repo,
        feedback_repo,
        generator,
        clock,
    ));

    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
