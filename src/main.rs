use std::sync::Arc;

use slide_forge::config::AppConfig;
use slide_forge::openai_client::OpenAiClient;
use slide_forge::services::{PgHistoryStore, PresentationService};
use slide_forge::storage::DeckStorage;
use slide_forge::{app_router, db, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging()?;

    let config = AppConfig::from_env()?;

    let storage = DeckStorage::new(&config.storage_dir);
    storage.ensure_root().await?;
    tracing::info!("Storage directory ready: {}", config.storage_dir.display());

    let db_pool = db::create_pool(&config.database_url).await?;

    tracing::info!("Initializing OpenAI client (model {})...", config.openai.model);
    let generator = Arc::new(OpenAiClient::new(&config.openai));
    let history = Arc::new(PgHistoryStore::new(db_pool));

    let shared_state = Arc::new(AppState {
        presentations: PresentationService::new(generator, history, storage),
        public_base_url: config.public_base_url.clone(),
    });

    let app = app_router(shared_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,slide_forge=trace,sqlx=info,reqwest=info,hyper=info,tower=info".to_string()
        } else {
            "info,slide_forge=info,sqlx=warn,reqwest=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    // JSON output for log aggregation, human-readable otherwise
    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Slide Forge starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Build mode: {}",
        if cfg!(debug_assertions) { "development" } else { "production" }
    );

    Ok(())
}
