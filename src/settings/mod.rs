pub mod settings_model;
pub mod settings_repository;

pub use settings_model::{Settings, SettingsUpdate};
pub use settings_repository::{SettingsRepository, SettingsRepositoryTrait};
