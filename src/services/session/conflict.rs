use serde::{Deserialize, Serialize};

use crate::models::session::{ScheduledSession, SessionTime};

/// Whether the session being edited takes part in its own conflict check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelfConflictPolicy {
    /// Saving an edit without moving it is allowed
    ExcludeActive,
    /// Every stored session is compared, including the one being edited
    #[default]
    IncludeActive,
}

impl SelfConflictPolicy {
    /// Case number to leave out of the scan for the given active session
    pub fn excluded<'a>(&self, active: Option<&'a str>) -> Option<&'a str> {
        match self {
            SelfConflictPolicy::ExcludeActive => active,
            SelfConflictPolicy::IncludeActive => None,
        }
    }
}

/// True iff a stored session other than `exclude` has the same date, hour,
/// minute and period as the candidate. Strings are compared exactly.
pub fn is_session_conflict(
    sessions: &[ScheduledSession],
    selected_date: &str,
    timing: &SessionTime,
    exclude: Option<&str>,
) -> bool {
    sessions
        .iter()
        .filter(|session| Some(session.case_number.as_str()) != exclude)
        .any(|session| session.occupies(selected_date, timing))
}
