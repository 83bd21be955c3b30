use color_eyre::eyre::eyre;
use sqlx::{types::Json, PgPool};

use crate::domain::{AppConfig, ConfigStore, ConfigStoreError, ConfigUpdate};

pub struct PostgresConfigStore {
    pool: PgPool,
    defaults: AppConfig,
}

impl PostgresConfigStore {
    pub fn new(pool: PgPool, defaults: AppConfig) -> Self {
        Self { pool, defaults }
    }
}

#[async_trait::async_trait]
impl ConfigStore for PostgresConfigStore {
    #[tracing::instrument(name = "Getting configuration from PostgreSQL", skip_all)]
    async fn get_config(&mut self) -> Result<AppConfig, ConfigStoreError> {
        // The table holds at most one row; a concurrent first read loses the
        // insert race and reads the winner's record back.
        sqlx::query(
            r#"
            INSERT INTO app_config (document) VALUES ($1)
            ON CONFLICT (singleton) DO NOTHING
            "#,
        )
        .bind(Json(&self.defaults))
        .execute(&self.pool)
        .await
        .map_err(|e| ConfigStoreError::UnexpectedError(eyre!(e)))?;

        let (Json(config),) = sqlx::query_as::<_, (Json<AppConfig>,)>(
            r#"
            SELECT document FROM app_config
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ConfigStoreError::UnexpectedError(eyre!(e)))?;

        Ok(config)
    }

    #[tracing::instrument(name = "Updating configuration in PostgreSQL", skip_all)]
    async fn update_config(
        &mut self,
        update: ConfigUpdate,
    ) -> Result<AppConfig, ConfigStoreError> {
        let mut config = self.get_config().await?;
        config.apply(update)?;

        sqlx::query(
            r#"
            UPDATE app_config SET document = $1
            "#,
        )
        .bind(Json(&config))
        .execute(&self.pool)
        .await
        .map_err(|e| ConfigStoreError::UnexpectedError(eyre!(e)))?;

        Ok(config)
    }
}
