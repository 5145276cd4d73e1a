mod service;

pub use service::{SettingsService, CONFIG_ENV_VAR};
