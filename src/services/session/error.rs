use thiserror::Error;

/// Reasons a session save is rejected. The store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Please pick a date before saving the session.")]
    DateMissing,
    #[error("Please select a complete session time (hour, minute and AM/PM).")]
    TimeIncomplete,
    #[error("Both claimant and respondent email addresses are required.")]
    EmailsRequired,
    #[error("A session is already scheduled on {date} at {time}.")]
    Conflict { date: String, time: String },
}

impl ScheduleError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ScheduleError::Conflict { .. })
    }
}
