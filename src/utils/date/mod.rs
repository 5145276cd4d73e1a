// Date utility functions
// Labels and calendar arithmetic used by the date grid

use chrono::{Datelike, Duration, NaiveDate};

/// Full label used as the session lookup key, e.g. "January 5, 2025"
pub fn full_date_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short label shown in a grid cell, e.g. "January 5"
pub fn display_date_label(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Most recent Sunday on or before `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(weekday)
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date` (day 0 of the following month)
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(date)
}
