use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colors for one day cell of the session grid
#[derive(Clone, Copy)]
pub(crate) struct DayCellPalette {
    pub regular_bg: Color32,
    pub booked_bg: Color32,
    pub hover_bg: Color32,
    pub border: Color32,
    pub booked_border: Color32,
    pub text: Color32,
    pub secondary_text: Color32,
}

impl DayCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            booked_bg: theme.booked_background,
            hover_bg: theme.hover_background,
            border: theme.day_border,
            booked_border: theme.booked_border,
            text: theme.text_primary,
            secondary_text: theme.text_secondary,
        }
    }

    pub fn fill(&self, booked: bool, hovered: bool) -> Color32 {
        match (booked, hovered) {
            (true, false) => self.booked_bg,
            (true, true) => with_alpha(self.booked_bg, 200),
            (false, true) => self.hover_bg,
            (false, false) => self.regular_bg,
        }
    }

    pub fn border(&self, booked: bool) -> Color32 {
        if booked {
            self.booked_border
        } else {
            self.border
        }
    }
}

/// Colors for a card in the session drawer
#[derive(Clone, Copy)]
pub(crate) struct SessionCardPalette {
    pub background: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub text: Color32,
    pub secondary_text: Color32,
}

impl SessionCardPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            background: theme.day_background,
            border: theme.day_border,
            accent: theme.booked_border,
            text: theme.text_primary,
            secondary_text: theme.text_secondary,
        }
    }
}
