// Settings module
// User preferences read from settings.toml

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::ui::ViewMode;
use crate::services::session::SelfConflictPolicy;

pub const MIN_TOAST_DURATION_MS: u64 = 500;
pub const MAX_TOAST_DURATION_MS: u64 = 30_000;

/// Theme selection; `System` follows the OS preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// View shown at start-up; updated when the user switches views
    pub default_view: ViewMode,
    /// How long a toast stays on screen
    pub toast_duration_ms: u64,
    pub theme: ThemePreference,
    /// Skip the session being edited when looking for conflicts
    pub exclude_active_from_conflicts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Week,
            toast_duration_ms: 3000,
            theme: ThemePreference::Light,
            exclude_active_from_conflicts: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_TOAST_DURATION_MS..=MAX_TOAST_DURATION_MS).contains(&self.toast_duration_ms) {
            return Err(format!(
                "toast_duration_ms must be between {} and {}",
                MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS
            ));
        }

        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn conflict_policy(&self) -> SelfConflictPolicy {
        if self.exclude_active_from_conflicts {
            SelfConflictPolicy::ExcludeActive
        } else {
            SelfConflictPolicy::IncludeActive
        }
    }
}
