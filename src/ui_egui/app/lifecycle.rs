use super::toast::ToastManager;
use super::SchedulerApp;
use crate::models::settings::Settings;
use crate::services::scheduler::SchedulerState;
use crate::services::session::UuidCaseNumbers;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;

impl SchedulerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::default_location();
        if settings_service.is_none() {
            log::warn!("No config directory available; settings will not be saved");
        }

        let settings = settings_service
            .as_ref()
            .map(load_settings_or_default)
            .unwrap_or_default();
        log::info!(
            "Loaded settings: default_view={}, theme={:?}",
            settings.default_view.label(),
            settings.theme
        );

        let app = Self::with_settings(settings, settings_service);
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the app from already-loaded settings. Nothing is written to disk
    /// when `settings_service` is `None`.
    pub fn with_settings(settings: Settings, settings_service: Option<SettingsService>) -> Self {
        let state = SchedulerState::new(settings.default_view, settings.conflict_policy());
        let active_theme = CalendarTheme::from_preference(settings.theme);
        let toast_manager = ToastManager::new(settings.toast_duration());

        Self {
            state,
            settings,
            settings_service,
            case_numbers: UuidCaseNumbers,
            active_theme,
            toast_manager,
        }
    }
}

fn load_settings_or_default(service: &SettingsService) -> Settings {
    match service.load() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!(
                "Failed to load settings from {}: {:#}. Using defaults.",
                service.path().display(),
                err
            );
            Settings::default()
        }
    }
}
