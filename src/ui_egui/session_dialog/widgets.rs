use crate::models::session::{Period, SessionTime, HOUR_OPTIONS, MINUTE_OPTIONS};
use crate::services::scheduler::SchedulerEvent;

fn selected_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Render hour, minute and AM/PM comboboxes.
/// Changed fields are reported as events; `time` itself is not modified.
pub fn render_session_time_picker(ui: &mut egui::Ui, time: &SessionTime) -> Vec<SchedulerEvent> {
    let mut events = Vec::new();
    let mut hour = time.hour.clone();
    let mut minute = time.minute.clone();
    let mut period = time.period;

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_source("session_hour")
            .width(70.0)
            .selected_text(selected_or(&hour, "Hour"))
            .show_ui(ui, |ui| {
                for h in HOUR_OPTIONS {
                    ui.selectable_value(&mut hour, h.to_string(), h);
                }
            });

        ui.label(":");

        egui::ComboBox::from_id_source("session_minute")
            .width(70.0)
            .selected_text(selected_or(&minute, "Minute"))
            .show_ui(ui, |ui| {
                for m in MINUTE_OPTIONS {
                    ui.selectable_value(&mut minute, m.to_string(), m);
                }
            });

        egui::ComboBox::from_id_source("session_period")
            .width(70.0)
            .selected_text(period.map_or("AM/PM", |p| p.as_str()))
            .show_ui(ui, |ui| {
                for p in Period::ALL {
                    ui.selectable_value(&mut period, Some(p), p.as_str());
                }
            });
    });

    if hour != time.hour {
        events.push(SchedulerEvent::HourSelected(hour));
    }
    if minute != time.minute {
        events.push(SchedulerEvent::MinuteSelected(minute));
    }
    if let Some(p) = period.filter(|p| Some(*p) != time.period) {
        events.push(SchedulerEvent::PeriodSelected(p));
    }

    events
}
