//! In-memory session store.
//! Record bookkeeping, validation and conflict checks are split across
//! focused submodules.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::session::{ScheduledSession, SessionTime};

mod case_number;
mod conflict;
pub mod crud;
mod error;
mod validation;

pub use case_number::{CaseNumberSource, SequentialCaseNumbers, UuidCaseNumbers};
pub use conflict::{is_session_conflict, SelfConflictPolicy};
pub use crud::UpsertOutcome;
pub use error::ScheduleError;
pub use validation::validate_session_form;

/// Ordered collection of scheduled sessions, unique by case number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionStore {
    sessions: Vec<ScheduledSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledSession> {
        self.sessions.iter()
    }

    pub fn get(&self, case_number: &str) -> Option<&ScheduledSession> {
        self.sessions.iter().find(|s| s.case_number == case_number)
    }

    pub fn contains(&self, case_number: &str) -> bool {
        self.get(case_number).is_some()
    }

    /// First session scheduled on the given full date label
    pub fn first_on_date(&self, date: &str) -> Option<&ScheduledSession> {
        self.sessions.iter().find(|s| s.is_on(date))
    }

    /// Full date labels that have at least one session
    pub fn booked_dates(&self) -> HashSet<&str> {
        self.sessions
            .iter()
            .filter_map(|s| s.selected_date.as_deref())
            .collect()
    }

    pub fn is_conflict(&self, date: &str, timing: &SessionTime, exclude: Option<&str>) -> bool {
        is_session_conflict(&self.sessions, date, timing, exclude)
    }
}
