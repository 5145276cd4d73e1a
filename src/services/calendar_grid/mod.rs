//! Date grid generation for the day, week and month views.
//!
//! Cells are derived from a reference "today" passed in by the caller; no
//! timezone conversion happens here.

use chrono::NaiveDate;

use crate::models::ui::ViewMode;
use crate::services::session::SessionStore;
use crate::utils::date::{
    display_date_label, first_day_of_month, full_date_label, last_day_of_month, start_of_week,
    weekday_name,
};

/// One clickable day in the calendar grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Short label, e.g. "January 5"
    pub display_date: String,
    /// Full label used as the session lookup key, e.g. "January 5, 2025"
    pub full_date: String,
    pub day_name: String,
    /// Whether any stored session falls on this day
    pub has_session: bool,
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            display_date: display_date_label(date),
            full_date: full_date_label(date),
            day_name: weekday_name(date),
            has_session: false,
        }
    }
}

/// Cells for the given view, in calendar order.
///
/// * `Day` - today only
/// * `Week` - the most recent Sunday through the following Saturday
/// * `Month` - day 1 through the last day of today's month
pub fn generate_cells(view: ViewMode, today: NaiveDate) -> Vec<DayCell> {
    match view {
        ViewMode::Day => vec![DayCell::new(today)],
        ViewMode::Week => start_of_week(today)
            .iter_days()
            .take(7)
            .map(DayCell::new)
            .collect(),
        ViewMode::Month => {
            let last = last_day_of_month(today);
            first_day_of_month(today)
                .iter_days()
                .take_while(|date| *date <= last)
                .map(DayCell::new)
                .collect()
        }
    }
}

/// Flag every cell whose full date has a stored session
pub fn mark_booked(cells: &mut [DayCell], store: &SessionStore) {
    let booked = store.booked_dates();
    for cell in cells.iter_mut() {
        cell.has_session = booked.contains(cell.full_date.as_str());
    }
}

/// Generate the grid for `view` and flag booked days
pub fn calendar_cells(view: ViewMode, today: NaiveDate, store: &SessionStore) -> Vec<DayCell> {
    let mut cells = generate_cells(view, today);
    mark_booked(&mut cells, store);
    cells
}
