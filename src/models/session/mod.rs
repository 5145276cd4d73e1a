// Session module
// Scheduled arbitration session and the transient form that edits it

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hour choices offered by the session dialog.
pub const HOUR_OPTIONS: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Minute choices offered by the session dialog.
pub const MINUTE_OPTIONS: [&str; 4] = ["00", "15", "30", "45"];

/// Half of the day a session starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Am, Period::Pm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Start time of a session as picked in the dialog.
///
/// Hour and minute are kept as the strings the user picked; comparisons are
/// exact, so `"9"` and `"09"` are different slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionTime {
    pub hour: String,
    pub minute: String,
    pub period: Option<Period>,
}

impl SessionTime {
    pub fn new(hour: impl Into<String>, minute: impl Into<String>, period: Period) -> Self {
        Self {
            hour: hour.into(),
            minute: minute.into(),
            period: Some(period),
        }
    }

    /// True when hour, minute and period have all been chosen
    pub fn is_complete(&self) -> bool {
        !self.hour.is_empty() && !self.minute.is_empty() && self.period.is_some()
    }

    /// Human readable label, e.g. `9:00 AM`
    pub fn label(&self) -> String {
        match self.period {
            Some(period) => format!("{}:{} {}", self.hour, self.minute, period),
            None => format!("{}:{}", self.hour, self.minute),
        }
    }
}

/// Participant addresses attached to a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddresses {
    pub claimant_email: String,
    pub respondent_email: String,
}

impl EmailAddresses {
    pub fn new(claimant: impl Into<String>, respondent: impl Into<String>) -> Self {
        Self {
            claimant_email: claimant.into(),
            respondent_email: respondent.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.claimant_email.is_empty() && !self.respondent_email.is_empty()
    }
}

/// A session attached to a calendar date.
///
/// `case_number` is assigned once when the session is first scheduled and is
/// the only identity used for update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSession {
    pub case_number: String,
    /// Full date label, e.g. "January 5, 2025"
    pub selected_date: Option<String>,
    pub session_timing: SessionTime,
    pub email_addresses: EmailAddresses,
}

impl ScheduledSession {
    /// Whether this session sits in the given date and time slot
    pub fn occupies(&self, date: &str, timing: &SessionTime) -> bool {
        self.selected_date.as_deref() == Some(date)
            && self.session_timing.hour == timing.hour
            && self.session_timing.minute == timing.minute
            && self.session_timing.period == timing.period
    }

    pub fn is_on(&self, date: &str) -> bool {
        self.selected_date.as_deref() == Some(date)
    }
}

/// Transient values held by the session dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionForm {
    pub selected_date: Option<String>,
    pub session_timing: SessionTime,
    pub email_addresses: EmailAddresses,
}

impl SessionForm {
    /// Empty form for the given date
    pub fn for_date(date: impl Into<String>) -> Self {
        Self {
            selected_date: Some(date.into()),
            ..Self::default()
        }
    }

    /// Form pre-filled with a session's current values
    pub fn from_session(session: &ScheduledSession) -> Self {
        Self {
            selected_date: session.selected_date.clone(),
            session_timing: session.session_timing.clone(),
            email_addresses: session.email_addresses.clone(),
        }
    }

    /// Build the record this form describes under the given case number
    pub fn to_session(&self, case_number: impl Into<String>) -> ScheduledSession {
        ScheduledSession {
            case_number: case_number.into(),
            selected_date: self.selected_date.clone(),
            session_timing: self.session_timing.clone(),
            email_addresses: self.email_addresses.clone(),
        }
    }

    /// Clear time and emails but keep the selected date
    pub fn clear_details(&mut self) {
        self.session_timing = SessionTime::default();
        self.email_addresses = EmailAddresses::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_session() -> ScheduledSession {
        ScheduledSession {
            case_number: "case-1".to_string(),
            selected_date: Some("January 5, 2025".to_string()),
            session_timing: SessionTime::new("9", "00", Period::Am),
            email_addresses: EmailAddresses::new("a@x.com", "b@x.com"),
        }
    }

    #[test]
    fn test_session_time_complete() {
        assert!(SessionTime::new("9", "00", Period::Am).is_complete());
        assert!(!SessionTime::default().is_complete());

        let mut time = SessionTime::new("9", "00", Period::Pm);
        time.period = None;
        assert!(!time.is_complete());
    }

    #[test]
    fn test_session_time_label() {
        assert_eq!(SessionTime::new("9", "15", Period::Pm).label(), "9:15 PM");
    }

    #[test]
    fn test_occupies_uses_exact_strings() {
        let session = sample_session();
        assert!(session.occupies("January 5, 2025", &SessionTime::new("9", "00", Period::Am)));
        assert!(!session.occupies("January 5, 2025", &SessionTime::new("09", "00", Period::Am)));
        assert!(!session.occupies("January 5, 2025", &SessionTime::new("9", "00", Period::Pm)));
        assert!(!session.occupies("January 6, 2025", &SessionTime::new("9", "00", Period::Am)));
    }

    #[test]
    fn test_form_round_trips_session_values() {
        let session = sample_session();
        let form = SessionForm::from_session(&session);

        assert_eq!(form.to_session("case-1"), session);
    }

    #[test]
    fn test_clear_details_keeps_date() {
        let mut form = SessionForm::from_session(&sample_session());
        form.clear_details();

        assert_eq!(form.selected_date.as_deref(), Some("January 5, 2025"));
        assert_eq!(form.session_timing, SessionTime::default());
        assert_eq!(form.email_addresses, EmailAddresses::default());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample_session()).unwrap();

        assert_eq!(json["caseNumber"], "case-1");
        assert_eq!(json["selectedDate"], "January 5, 2025");
        assert_eq!(json["sessionTiming"]["period"], "AM");
        assert_eq!(json["emailAddresses"]["claimantEmail"], "a@x.com");
    }
}
