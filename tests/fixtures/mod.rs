// Test fixtures - reusable test data
// Provides consistent sessions and a scheduler driver across test files

#![allow(dead_code)]

use session_scheduler::models::notification::Notification;
use session_scheduler::models::session::{EmailAddresses, Period, ScheduledSession, SessionTime};
use session_scheduler::services::scheduler::{SchedulerEvent, SchedulerState};
use session_scheduler::services::session::SequentialCaseNumbers;

pub const JAN_5_2025: &str = "January 5, 2025";
pub const CLAIMANT: &str = "a@x.com";
pub const RESPONDENT: &str = "b@x.com";

/// 9:00 AM
pub fn nine_am() -> SessionTime {
    SessionTime::new("9", "00", Period::Am)
}

pub fn session(case_number: &str, date: &str, timing: SessionTime) -> ScheduledSession {
    ScheduledSession {
        case_number: case_number.to_string(),
        selected_date: Some(date.to_string()),
        session_timing: timing,
        email_addresses: EmailAddresses::new(CLAIMANT, RESPONDENT),
    }
}

/// Drives a `SchedulerState` the way the window does, with predictable
/// case numbers.
pub struct Driver {
    pub state: SchedulerState,
    pub ids: SequentialCaseNumbers,
    pub notifications: Vec<Notification>,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            state: SchedulerState::default(),
            ids: SequentialCaseNumbers::default(),
            notifications: Vec::new(),
        }
    }

    pub fn send(&mut self, event: SchedulerEvent) {
        let transition = std::mem::take(&mut self.state).apply(event, &mut self.ids);
        self.state = transition.state;
        self.notifications.extend(transition.notification);
    }

    pub fn fill_time(&mut self, hour: &str, minute: &str, period: Period) {
        self.send(SchedulerEvent::HourSelected(hour.to_string()));
        self.send(SchedulerEvent::MinuteSelected(minute.to_string()));
        self.send(SchedulerEvent::PeriodSelected(period));
    }

    pub fn fill_emails(&mut self, claimant: &str, respondent: &str) {
        self.send(SchedulerEvent::ClaimantEmailChanged(claimant.to_string()));
        self.send(SchedulerEvent::RespondentEmailChanged(respondent.to_string()));
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}
