mod drawer;
mod lifecycle;
mod toast;
mod toolbar;

use self::toast::ToastManager;
use crate::models::settings::Settings;
use crate::services::calendar_grid::calendar_cells;
use crate::services::scheduler::{SchedulerEvent, SchedulerState};
use crate::services::session::UuidCaseNumbers;
use crate::services::settings::SettingsService;
use crate::ui_egui::session_dialog::render_session_dialog;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::CalendarGridView;
use chrono::Local;

pub struct SchedulerApp {
    /// Sessions, dialog form and drawer state
    state: SchedulerState,
    settings: Settings,
    /// `None` when no config directory could be resolved
    settings_service: Option<SettingsService>,
    case_numbers: UuidCaseNumbers,
    active_theme: CalendarTheme,
    toast_manager: ToastManager,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl SchedulerApp {
    /// Feed events through the controller, surfacing notifications as toasts.
    fn dispatch(&mut self, events: Vec<SchedulerEvent>) {
        for event in events {
            let view_change = match &event {
                SchedulerEvent::ViewModeChanged(mode) => Some(*mode),
                _ => None,
            };

            let transition = std::mem::take(&mut self.state).apply(event, &mut self.case_numbers);
            self.state = transition.state;

            if let Some(notification) = transition.notification {
                self.toast_manager.show(notification);
            }

            if let Some(mode) = view_change {
                if self.settings.default_view != mode {
                    self.settings.default_view = mode;
                    self.persist_settings();
                }
            }
        }
    }

    fn persist_settings(&self) {
        let Some(service) = &self.settings_service else {
            return;
        };
        if let Err(err) = service.save(&self.settings) {
            log::warn!("Failed to save settings: {:#}", err);
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context) {
        let mut events = Vec::new();

        events.extend(self.render_toolbar(ctx));

        if self.state.show_session_list {
            events.extend(self.render_session_drawer(ctx));
        }

        let today = Local::now().date_naive();
        let cells = calendar_cells(self.state.view_mode, today, &self.state.store);
        let dialog_open = self.state.dialog.is_open();

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(self.active_theme.app_background))
            .show(ctx, |ui| {
                // The dialog is modal: the grid stays visible but inert
                ui.add_enabled_ui(!dialog_open, |ui| {
                    if let Some(date) =
                        CalendarGridView::show(ui, &cells, self.state.view_mode, &self.active_theme)
                    {
                        events.push(SchedulerEvent::DateSelected(date));
                    }
                });
            });

        if dialog_open {
            events.extend(render_session_dialog(ctx, &self.state.dialog, &self.state.form));
        }

        self.dispatch(events);

        self.toast_manager.render(ctx, self.active_theme.is_dark);
    }
}
