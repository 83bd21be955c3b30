use crate::domain::{AppConfig, ConfigStore, ConfigStoreError, ConfigUpdate};

pub struct InMemoryConfigStore {
    defaults: AppConfig,
    config: Option<AppConfig>,
}

impl InMemoryConfigStore {
    pub fn new(defaults: AppConfig) -> Self {
        Self {
            defaults,
            config: None,
        }
    }
}

#[async_trait::async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn get_config(&mut self) -> Result<AppConfig, ConfigStoreError> {
        Ok(self
            .config
            .get_or_insert_with(|| self.defaults.clone())
            .clone())
    }

    async fn update_config(
        &mut self,
        update: ConfigUpdate,
    ) -> Result<AppConfig, ConfigStoreError> {
        let mut config = self.get_config().await?;
        config.apply(update)?;
        self.config = Some(config.clone());
        Ok(config)
    }
}
