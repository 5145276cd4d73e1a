use super::ScheduleError;
use crate::models::session::{EmailAddresses, SessionTime};

/// Check the dialog fields are filled in.
///
/// The time is checked before the emails, so an incomplete time is reported
/// even when the emails are missing too. Email format is not checked.
pub fn validate_session_form(
    timing: &SessionTime,
    emails: &EmailAddresses,
) -> Result<(), ScheduleError> {
    if !timing.is_complete() {
        return Err(ScheduleError::TimeIncomplete);
    }

    if !emails.is_complete() {
        return Err(ScheduleError::EmailsRequired);
    }

    Ok(())
}
