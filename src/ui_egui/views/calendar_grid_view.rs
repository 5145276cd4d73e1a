use egui::{Align2, CursorIcon, FontId, Margin, Rounding, Sense, Stroke, Vec2};

use super::palette::DayCellPalette;
use crate::models::ui::ViewMode;
use crate::services::calendar_grid::DayCell;
use crate::ui_egui::theme::CalendarTheme;

const CELL_WIDTH: f32 = 120.0;
const CELL_HEIGHT: f32 = 80.0;
const CELL_SPACING: f32 = 8.0;

pub struct CalendarGridView;

impl CalendarGridView {
    /// Render the day cells. Returns the full date label of a clicked cell.
    pub fn show(
        ui: &mut egui::Ui,
        cells: &[DayCell],
        view_mode: ViewMode,
        theme: &CalendarTheme,
    ) -> Option<String> {
        let palette = DayCellPalette::from_theme(theme);
        let mut clicked = None;

        egui::Frame::none()
            .fill(theme.calendar_background)
            .rounding(Rounding::same(8.0))
            .stroke(Stroke::new(1.0, theme.day_border))
            .inner_margin(Margin::same(24.0))
            .show(ui, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = Vec2::splat(CELL_SPACING);

                        let width = match view_mode {
                            ViewMode::Day => ui.available_width(),
                            ViewMode::Week | ViewMode::Month => CELL_WIDTH,
                        };

                        for cell in cells {
                            if Self::show_cell(ui, cell, Vec2::new(width, CELL_HEIGHT), &palette) {
                                clicked = Some(cell.full_date.clone());
                            }
                        }
                    });
                });
            });

        clicked
    }

    fn show_cell(ui: &mut egui::Ui, cell: &DayCell, size: Vec2, palette: &DayCellPalette) -> bool {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let hovered = response.hovered();

        let painter = ui.painter();
        painter.rect(
            rect,
            Rounding::same(8.0),
            palette.fill(cell.has_session, hovered),
            Stroke::new(2.0, palette.border(cell.has_session)),
        );
        painter.text(
            rect.center() - Vec2::new(0.0, 9.0),
            Align2::CENTER_CENTER,
            &cell.display_date,
            FontId::proportional(15.0),
            palette.text,
        );
        painter.text(
            rect.center() + Vec2::new(0.0, 12.0),
            Align2::CENTER_CENTER,
            &cell.day_name,
            FontId::proportional(11.0),
            palette.secondary_text,
        );

        let tooltip = if cell.has_session {
            format!("{}\nSession scheduled, click to edit", cell.full_date)
        } else {
            format!("{}\nClick to schedule a session", cell.full_date)
        };

        response
            .on_hover_cursor(CursorIcon::PointingHand)
            .on_hover_text(tooltip)
            .clicked()
    }
}
