//! Right-hand drawer listing every scheduled session.

use super::SchedulerApp;
use crate::services::scheduler::SchedulerEvent;
use crate::ui_egui::views::{SessionCard, SessionCardAction};
use egui::RichText;

const DRAWER_WIDTH: f32 = 450.0;

impl SchedulerApp {
    pub(super) fn render_session_drawer(&self, ctx: &egui::Context) -> Vec<SchedulerEvent> {
        let mut events = Vec::new();

        egui::SidePanel::right("session_list")
            .exact_width(DRAWER_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.heading("Scheduled Sessions");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕").on_hover_text("Close").clicked() {
                            events.push(SchedulerEvent::SessionListClosed);
                        }
                    });
                });
                ui.separator();

                if self.state.store.is_empty() {
                    ui.add_space(16.0);
                    ui.label(
                        RichText::new("No sessions scheduled yet")
                            .italics()
                            .color(self.active_theme.text_secondary),
                    );
                    return;
                }

                let dialog_open = self.state.dialog.is_open();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_enabled_ui(!dialog_open, |ui| {
                        for session in self.state.store.iter() {
                            match SessionCard::show(ui, session, &self.active_theme) {
                                Some(SessionCardAction::Edit) => {
                                    events.push(SchedulerEvent::EditRequested(session.clone()));
                                }
                                Some(SessionCardAction::Delete) => {
                                    events.push(SchedulerEvent::DeleteRequested(
                                        session.case_number.clone(),
                                    ));
                                }
                                None => {}
                            }
                            ui.add_space(8.0);
                        }
                    });
                });
            });

        events
    }
}
