//! # reelquery Server
//!
//! Backend for the reelquery movie/TV chatbot.
//!
//! The server exposes one chat endpoint: free-form user text is classified
//! into a structured intent (OpenAI), routed to exactly one TMDB-style
//! catalog call, and the results are rendered into a friendly reply.
//!
//! Built on Axum; both outbound calls (classifier, catalog) go through
//! reqwest with per-boundary timeout and retry policy.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelquery_core::{ChatQueryService, OpenAiClassifier, TmdbGateway};
use reelquery_server::{config::Config, routes::create_api_router, AppState};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "reelquery-server")]
#[command(about = "Natural-language movie/TV chatbot over a TMDB-style catalog")]
struct Cli {
    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Quieter defaults. Override via RUST_LOG.
                    "info,tower_http=warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    if let Some(port) = cli.port {
        config.server_port = port;
    }

    let classifier = OpenAiClassifier::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_base_url.clone(),
    )?;
    let catalog = TmdbGateway::new(
        config.tmdb_api_key.clone(),
        config.tmdb_base_url.clone(),
    )?;
    let chat = ChatQueryService::new(Arc::new(classifier), Arc::new(catalog));
    let state = AppState::new(chat);

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::list([Method::GET, Method::POST]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE]));

    let app = create_api_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr =
        format!("{}:{}", config.server_host, config.server_port)
            .parse()
            .context("invalid server address")?;

    info!(
        %addr,
        model = %config.openai_model,
        catalog = %config.tmdb_base_url,
        "reelquery server listening"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
