use egui::{Margin, RichText, Rounding, Stroke};

use super::palette::SessionCardPalette;
use crate::models::session::ScheduledSession;
use crate::ui_egui::theme::CalendarTheme;

/// Characters of the case number shown before it is cut off
const CASE_NUMBER_PREVIEW: usize = 8;

/// Button pressed on a session card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCardAction {
    Edit,
    Delete,
}

pub struct SessionCard;

impl SessionCard {
    pub fn show(
        ui: &mut egui::Ui,
        session: &ScheduledSession,
        theme: &CalendarTheme,
    ) -> Option<SessionCardAction> {
        let palette = SessionCardPalette::from_theme(theme);
        let mut action = None;

        egui::Frame::none()
            .fill(palette.background)
            .rounding(Rounding::same(6.0))
            .stroke(Stroke::new(1.0, palette.border))
            .inner_margin(Margin::symmetric(12.0, 10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!(
                                "Case Number: {}",
                                case_number_preview(&session.case_number)
                            ))
                            .strong()
                            .color(palette.accent),
                        )
                        .on_hover_text(session.case_number.as_str());

                        let date = session.selected_date.as_deref().unwrap_or("No date");
                        ui.label(RichText::new(format!("Date: {}", date)).color(palette.text));
                        ui.label(
                            RichText::new(format!("Time: {}", session.session_timing.label()))
                                .color(palette.text),
                        );
                        ui.label(
                            RichText::new(format!(
                                "Claimant: {}",
                                session.email_addresses.claimant_email
                            ))
                            .color(palette.secondary_text),
                        );
                        ui.label(
                            RichText::new(format!(
                                "Respondent: {}",
                                session.email_addresses.respondent_email
                            ))
                            .color(palette.secondary_text),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        if ui.button("🗑").on_hover_text("Delete session").clicked() {
                            action = Some(SessionCardAction::Delete);
                        }
                        if ui.button("✏").on_hover_text("Edit session").clicked() {
                            action = Some(SessionCardAction::Edit);
                        }
                    });
                });
            });

        action
    }
}

fn case_number_preview(case_number: &str) -> String {
    if case_number.chars().count() > CASE_NUMBER_PREVIEW {
        let preview: String = case_number.chars().take(CASE_NUMBER_PREVIEW).collect();
        format!("{}…", preview)
    } else {
        case_number.to_string()
    }
}
