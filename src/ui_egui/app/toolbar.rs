use super::SchedulerApp;
use crate::models::ui::ViewMode;
use crate::services::scheduler::SchedulerEvent;
use egui::RichText;

impl SchedulerApp {
    /// Title, view toggle and the button opening the session list.
    pub(super) fn render_toolbar(&self, ctx: &egui::Context) -> Vec<SchedulerEvent> {
        let mut events = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Arbitration Session Scheduler").strong());
                ui.add_space(16.0);

                for mode in ViewMode::ALL {
                    if ui
                        .selectable_label(self.state.view_mode == mode, mode.label())
                        .clicked()
                        && self.state.view_mode != mode
                    {
                        events.push(SchedulerEvent::ViewModeChanged(mode));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = format!("View All Scheduled Sessions ({})", self.state.store.len());
                    if ui.button(label).clicked() {
                        events.push(if self.state.show_session_list {
                            SchedulerEvent::SessionListClosed
                        } else {
                            SchedulerEvent::SessionListOpened
                        });
                    }
                });
            });
            ui.add_space(6.0);
        });

        events
    }
}
