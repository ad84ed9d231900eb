use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::storage::storage_constants::SETTINGS_KEY;
use crate::storage::{get_json, set_json, KvStore};

use super::settings_model::{Settings, SettingsUpdate};

/// Trait defining the contract for settings persistence.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    async fn get_settings(&self) -> Result<Settings>;
    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings>;
    async fn reset_settings(&self) -> Result<Settings>;
}

pub struct SettingsRepository {
    store: Arc<dyn KvStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        SettingsRepository { store }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    async fn get_settings(&self) -> Result<Settings> {
        Ok(get_json::<Settings>(self.store.as_ref(), SETTINGS_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings> {
        let mut settings = self.get_settings().await?;
        settings.apply(update);
        set_json(self.store.as_ref(), SETTINGS_KEY, &settings).await?;
        Ok(settings)
    }

    async fn reset_settings(&self) -> Result<Settings> {
        let settings = Settings::default();
        set_json(self.store.as_ref(), SETTINGS_KEY, &settings).await?;
        Ok(settings)
    }
}
