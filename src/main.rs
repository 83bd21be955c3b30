use color_eyre::eyre::{eyre, Result};
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;
use tokio::sync::RwLock;

use shift_planner::{
    app_state::AppState,
    domain::{AccessCode, AppConfig},
    get_postgres_pool,
    services::data_stores::{
        InMemoryConfigStore, InMemoryDayRequestStore, InMemoryEmployeeStore,
        InMemoryGuideStore, InMemoryWeekStore, PostgresConfigStore,
        PostgresDocumentStore,
    },
    utils::{
        constants::{
            APP_ADDRESS, DATABASE_URL, DEFAULT_ADMIN_CODE, DEFAULT_USER_CODE,
        },
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let defaults = AppConfig::new(
        AccessCode::parse(DEFAULT_ADMIN_CODE.clone())?,
        AccessCode::parse(DEFAULT_USER_CODE.clone())?,
    );

    let app_state = match DATABASE_URL.as_ref() {
        Some(url) => postgres_app_state(url, defaults).await?,
        None => {
            tracing::warn!("DATABASE_URL is not set, records are kept in memory");
            in_memory_app_state(defaults)
        }
    };

    let app = Application::build(app_state, &APP_ADDRESS)
        .await
        .map_err(|e| eyre!("Failed to build app: {e}"))?;

    app.run().await?;
    Ok(())
}

async fn postgres_app_state(
    url: &Secret<String>,
    defaults: AppConfig,
) -> Result<AppState> {
    let pg_pool = get_postgres_pool(url).await?;

    sqlx::migrate!().run(&pg_pool).await?;
    tracing::info!(
        max_connections = 5,
        "Connected to PostgreSQL at {}",
        redact_credentials(url.expose_secret())
    );

    let document_store = PostgresDocumentStore::new(pg_pool.clone());
    Ok(AppState::new(
        Arc::new(RwLock::new(document_store.clone())),
        Arc::new(RwLock::new(document_store.clone())),
        Arc::new(RwLock::new(document_store.clone())),
        Arc::new(RwLock::new(document_store)),
        Arc::new(RwLock::new(PostgresConfigStore::new(pg_pool, defaults))),
    ))
}

fn in_memory_app_state(defaults: AppConfig) -> AppState {
    AppState::new(
        Arc::new(RwLock::new(InMemoryEmployeeStore::default())),
        Arc::new(RwLock::new(InMemoryWeekStore::default())),
        Arc::new(RwLock::new(InMemoryDayRequestStore::default())),
        Arc::new(RwLock::new(InMemoryGuideStore::default())),
        Arc::new(RwLock::new(InMemoryConfigStore::new(defaults))),
    )
}

/// Keeps the host and database name, drops anything before the `@`.
fn redact_credentials(url: &str) -> &str {
    url.rsplit_once('@').map_or(url, |(_, host)| host)
}
