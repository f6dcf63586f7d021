use anyhow::Result;
use logiinsight::application::{
    ports::{content::ContentSource, storage::KeyValueStore, time::Clock},
    services::{ApplicationServices, ServiceSettings, detail::DetailLimits},
};
use logiinsight::config::AppConfig;
use logiinsight::domain::article::ArticleRepository;
use logiinsight::infrastructure::{
    content::{GeminiConfig, GeminiContentSource},
    repositories::InMemoryArticleRepository,
    storage::{InMemoryKeyValueStore, RedisKeyValueStore},
    time::SystemClock,
};
use logiinsight::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
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
    init_tracing();

    let config = AppConfig::from_env()?;

    if config.gemini_api_key().is_empty() {
        tracing::warn!("no GEMINI_API_KEY or API_KEY configured, serving fallback content");
    }

    let article_repo: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());
    let content_source: Arc<dyn ContentSource> =
        Arc::new(GeminiContentSource::new(GeminiConfig {
            api_key: config.gemini_api_key().to_string(),
            model: config.gemini_model().to_string(),
            api_base: config.gemini_api_base().to_string(),
        }));
    let storage: Arc<dyn KeyValueStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("persisting comments in redis");
            Arc::new(RedisKeyValueStore::from_url(url)?)
        }
        None => {
            tracing::info!("REDIS_URL not set, comments are kept in memory");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        content_source,
        storage,
        clock,
        ServiceSettings {
            namespace: config.storage_namespace().to_string(),
            site_url: config.public_site_url().to_string(),
            detail_limits: DetailLimits {
                max_viewers: config.max_viewers(),
                idle_ttl: config.viewer_idle_ttl(),
            },
        },
    ));

    // Requests arriving before this completes render as `loading`.
    services.store.spawn_load();

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router_with_options(
        state,
        &RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit_enabled(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

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
