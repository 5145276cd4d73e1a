use egui::RichText;

use crate::models::session::SessionForm;
use crate::services::scheduler::{DialogMode, SchedulerEvent};

mod widgets;

use widgets::render_session_time_picker;

const DIALOG_WIDTH: f32 = 520.0;

/// Render the schedule/edit dialog for the current form.
///
/// The form is read-only here; every edit and button press comes back as a
/// [`SchedulerEvent`] for the controller to apply.
pub fn render_session_dialog(
    ctx: &egui::Context,
    dialog: &DialogMode,
    form: &SessionForm,
) -> Vec<SchedulerEvent> {
    let mut events = Vec::new();

    egui::Window::new(dialog.title())
        .id(egui::Id::new("session_dialog"))
        .collapsible(false)
        .resizable(false)
        .default_width(DIALOG_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(DIALOG_WIDTH);
            ui.add_space(8.0);

            let date = form.selected_date.as_deref().unwrap_or("No date selected");
            ui.label(RichText::new(format!("Date: {}", date)).size(18.0));
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Time:").size(18.0));
                events.extend(render_session_time_picker(ui, &form.session_timing));
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let field_width = (DIALOG_WIDTH - 16.0) / 2.0;

                let mut claimant = form.email_addresses.claimant_email.clone();
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut claimant)
                            .hint_text("Claimant Email Id")
                            .desired_width(field_width),
                    )
                    .changed()
                {
                    events.push(SchedulerEvent::ClaimantEmailChanged(claimant));
                }

                let mut respondent = form.email_addresses.respondent_email.clone();
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut respondent)
                            .hint_text("Respondent Email Id")
                            .desired_width(field_width),
                    )
                    .changed()
                {
                    events.push(SchedulerEvent::RespondentEmailChanged(respondent));
                }
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if matches!(dialog, DialogMode::Edit(_))
                    && ui
                        .button("Schedule another")
                        .on_hover_text("Start a new session on this date")
                        .clicked()
                {
                    events.push(SchedulerEvent::ScheduleAnother);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        events.push(SchedulerEvent::SaveRequested);
                    }
                    if ui.button("Cancel").clicked() {
                        events.push(SchedulerEvent::CancelRequested);
                    }
                });
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        events.push(SchedulerEvent::CancelRequested);
    }

    events
}
