//! Theme module for the egui scheduler
//!
//! Defines the CalendarTheme structure and resolves it from the user's
//! theme preference.

use egui::Color32;

use crate::models::settings::ThemePreference;

/// Colors used by the scheduler window
#[derive(Debug, Clone)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Calendar card background color
    pub calendar_background: Color32,

    /// Regular day cell background
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Background of a day that has a session
    pub booked_background: Color32,

    /// Border of a day that has a session
    pub booked_border: Color32,

    /// Hover highlight for day cells
    pub hover_background: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (weekday names, card details)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(250, 249, 246),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(189, 189, 189),
            booked_background: Color32::from_rgb(255, 230, 230),
            booked_border: Color32::from_rgb(220, 40, 40),
            hover_background: Color32::from_rgb(245, 245, 245),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            day_background: Color32::from_rgb(48, 48, 48),
            day_border: Color32::from_rgb(80, 80, 80),
            booked_background: Color32::from_rgb(80, 35, 35),
            booked_border: Color32::from_rgb(235, 90, 90),
            hover_background: Color32::from_rgb(60, 60, 64),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Resolve a preference, asking the OS when it is `System`
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
