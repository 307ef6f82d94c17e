use anyhow::Result;
use axum::{ServiceExt, body::Body};
use contentcast::application::{
    ports::{
        AccessTokenVerifierPort, ClockPort, MarkdownRendererPort, TargetSiteClientPort,
    },
    services::ApplicationServices,
};
use contentcast::config::AppConfig;
use contentcast::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    platform::{PlatformLinkRepository, PlatformRepository},
};
use contentcast::infrastructure::{
    database,
    markdown::ComrakMarkdownRenderer,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresPlatformLinkRepository, PostgresPlatformRepository,
    },
    security::token::StaticTokenVerifier,
    time::SystemClock,
    wordpress::WordPressClient,
};
use contentcast::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

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

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let platform_repo: Arc<dyn PlatformRepository> =
        Arc::new(PostgresPlatformRepository::new(pool.clone()));
    let platform_link_repo: Arc<dyn PlatformLinkRepository> =
        Arc::new(PostgresPlatformLinkRepository::new(pool));

    let client_settings = config.target_client_settings();
    tracing::info!(
        timeout_secs = client_settings.timeout.as_secs(),
        accept_invalid_certs = client_settings.accept_invalid_certs,
        "target site client configured"
    );
    let site_client: Arc<TargetSiteClientPort> =
        Arc::new(WordPressClient::new(&client_settings)?);
    let renderer: Arc<MarkdownRendererPort> = Arc::new(ComrakMarkdownRenderer::new());
    let token_verifier: Arc<AccessTokenVerifierPort> =
        Arc::new(StaticTokenVerifier::new(config.api_token(), "api"));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        platform_repo,
        platform_link_repo,
        site_client,
        renderer,
        token_verifier,
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
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
