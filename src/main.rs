use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use export_hub::adapters::ai::{GeminiConfig, GeminiProvider};
use export_hub::adapters::http::{app_router, cors_layer, AiAppState, LogisticsAppState};
use export_hub::adapters::memory::{
    InMemoryConversationLog, InMemoryDocumentRepository, InMemoryMarketIntelligenceRepository,
    InMemoryShipmentRepository,
};
use export_hub::adapters::postgres::{
    PostgresConversationLog, PostgresDocumentRepository, PostgresMarketIntelligenceRepository,
    PostgresShipmentRepository,
};
use export_hub::config::{AiConfig, AppConfig, DatabaseConfig};
use export_hub::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let (ai_state, logistics_state) = match &config.database {
        Some(database) => postgres_states(database, &config.ai).await?,
        None => {
            tracing::warn!("No database configured, records are kept in memory");
            memory_states(&config.ai)?
        }
    };

    let app = app_router(
        ai_state,
        logistics_state,
        cors_layer(&config.server.cors_origins_list()),
    );

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "Starting Export Hub");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Builds the Gemini provider, or `None` when no key is configured.
fn build_provider(ai: &AiConfig) -> Result<Option<Arc<dyn AIProvider>>, Box<dyn std::error::Error>> {
    let api_key = match ai.require_api_key() {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(error = %err, "AI endpoints will answer with a configuration error");
            return Ok(None);
        }
    };

    let provider = GeminiProvider::new(
        GeminiConfig::new(api_key)
            .with_model(ai.model.clone())
            .with_base_url(ai.base_url.clone()),
    )?;
    tracing::info!(model = %ai.model, "Gemini provider configured");

    Ok(Some(Arc::new(provider)))
}

async fn postgres_states(
    database: &DatabaseConfig,
    ai: &AiConfig,
) -> Result<(AiAppState, LogisticsAppState), Box<dyn std::error::Error>> {
    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .connect(&database.url)
        .await?;
    tracing::info!("Connected to PostgreSQL");

    let ai_state = AiAppState {
        provider: build_provider(ai)?,
        model: ai.model.clone(),
        market_repository: Arc::new(PostgresMarketIntelligenceRepository::new(pool.clone())),
        conversation_log: Arc::new(PostgresConversationLog::new(pool.clone())),
    };
    let logistics_state = LogisticsAppState {
        shipment_repository: Arc::new(PostgresShipmentRepository::new(pool.clone())),
        document_repository: Arc::new(PostgresDocumentRepository::new(pool)),
    };

    Ok((ai_state, logistics_state))
}

fn memory_states(
    ai: &AiConfig,
) -> Result<(AiAppState, LogisticsAppState), Box<dyn std::error::Error>> {
    let ai_state = AiAppState {
        provider: build_provider(ai)?,
        model: ai.model.clone(),
        market_repository: Arc::new(InMemoryMarketIntelligenceRepository::new()),
        conversation_log: Arc::new(InMemoryConversationLog::new()),
    };
    let logistics_state = LogisticsAppState {
        shipment_repository: Arc::new(InMemoryShipmentRepository::new()),
        document_repository: Arc::new(InMemoryDocumentRepository::new()),
    };

    Ok((ai_state, logistics_state))
}
