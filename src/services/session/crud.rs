use super::{validate_session_form, CaseNumberSource, ScheduleError, SelfConflictPolicy, SessionStore};
use crate::models::session::{ScheduledSession, SessionForm};

/// What a successful save did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Scheduled(String),
    Updated(String),
}

impl UpsertOutcome {
    pub fn case_number(&self) -> &str {
        match self {
            UpsertOutcome::Scheduled(id) | UpsertOutcome::Updated(id) => id,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            UpsertOutcome::Scheduled(_) => "Session scheduled",
            UpsertOutcome::Updated(_) => "Session updated",
        }
    }
}

impl SessionStore {
    /// Replace the record with the same case number in place, or append it.
    pub fn upsert(&mut self, session: ScheduledSession) -> UpsertOutcome {
        match self
            .sessions
            .iter_mut()
            .find(|existing| existing.case_number == session.case_number)
        {
            Some(existing) => {
                let case_number = session.case_number.clone();
                *existing = session;
                UpsertOutcome::Updated(case_number)
            }
            None => {
                let case_number = session.case_number.clone();
                self.sessions.push(session);
                UpsertOutcome::Scheduled(case_number)
            }
        }
    }

    /// Remove a session by case number. Absent case numbers are a no-op.
    pub fn delete(&mut self, case_number: &str) -> Option<ScheduledSession> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.case_number == case_number)?;
        Some(self.sessions.remove(index))
    }

    /// Draw case numbers until one is not already in the store
    pub fn fresh_case_number(&self, source: &mut dyn CaseNumberSource) -> String {
        loop {
            let candidate = source.next_case_number();
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Save the dialog form.
    ///
    /// With an active case number the matching record is replaced in place,
    /// keeping its case number and taking everything else from the form.
    /// Without one a new record is appended under a fresh case number.
    pub fn save_form(
        &mut self,
        form: &SessionForm,
        active: Option<&str>,
        policy: SelfConflictPolicy,
        source: &mut dyn CaseNumberSource,
    ) -> Result<UpsertOutcome, ScheduleError> {
        let date = form
            .selected_date
            .as_deref()
            .ok_or(ScheduleError::DateMissing)?;

        validate_session_form(&form.session_timing, &form.email_addresses)?;

        if self.is_conflict(date, &form.session_timing, policy.excluded(active)) {
            return Err(ScheduleError::Conflict {
                date: date.to_string(),
                time: form.session_timing.label(),
            });
        }

        let outcome = match active {
            Some(case_number) => {
                let outcome = self.upsert(form.to_session(case_number));
                if let UpsertOutcome::Scheduled(id) = &outcome {
                    log::warn!("Edited session {} was no longer stored; re-added it", id);
                }
                UpsertOutcome::Updated(outcome.case_number().to_string())
            }
            None => {
                let case_number = self.fresh_case_number(source);
                self.upsert(form.to_session(case_number))
            }
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::{EmailAddresses, Period, SessionTime};
    use crate::services::session::SequentialCaseNumbers;
    use pretty_assertions::assert_eq;

    const DATE: &str = "January 5, 2025";

    fn filled_form() -> SessionForm {
        SessionForm {
            selected_date: Some(DATE.to_string()),
            session_timing: SessionTime::new("9", "00", Period::Am),
            email_addresses: EmailAddresses::new("a@x.com", "b@x.com"),
        }
    }

    /// Hands out a fixed list of case numbers in order
    struct FixedCaseNumbers(Vec<&'static str>);

    impl CaseNumberSource for FixedCaseNumbers {
        fn next_case_number(&mut self) -> String {
            self.0.remove(0).to_string()
        }
    }

    #[test]
    fn test_upsert_inserts_then_updates() {
        let mut store = SessionStore::new();
        let mut session = filled_form().to_session("case-1");

        assert_eq!(store.upsert(session.clone()), UpsertOutcome::Scheduled("case-1".into()));

        session.session_timing.minute = "15".to_string();
        assert_eq!(store.upsert(session), UpsertOutcome::Updated("case-1".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("case-1").map(|s| s.session_timing.minute.as_str()), Some("15"));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = SessionStore::new();
        store.upsert(filled_form().to_session("case-1"));

        assert!(store.delete("case-9").is_none());
        assert_eq!(store.len(), 1);

        assert!(store.delete("case-1").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_fresh_case_number_skips_taken_ids() {
        let mut store = SessionStore::new();
        store.upsert(filled_form().to_session("taken"));

        let mut source = FixedCaseNumbers(vec!["taken", "taken", "free"]);
        assert_eq!(store.fresh_case_number(&mut source), "free");
    }

    #[test]
    fn test_save_form_new_session() {
        let mut store = SessionStore::new();
        let mut ids = SequentialCaseNumbers::default();

        let outcome = store
            .save_form(&filled_form(), None, SelfConflictPolicy::ExcludeActive, &mut ids)
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Scheduled("case-1".into()));
        assert_eq!(outcome.message(), "Session scheduled");
        assert_eq!(store.get("case-1"), Some(&filled_form().to_session("case-1")));
    }

    #[test]
    fn test_save_form_requires_date() {
        let mut store = SessionStore::new();
        let mut form = filled_form();
        form.selected_date = None;

        let result = store.save_form(
            &form,
            None,
            SelfConflictPolicy::ExcludeActive,
            &mut SequentialCaseNumbers::default(),
        );

        assert_eq!(result, Err(ScheduleError::DateMissing));
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_form_rejects_conflict() {
        let mut store = SessionStore::new();
        let mut ids = SequentialCaseNumbers::default();
        store
            .save_form(&filled_form(), None, SelfConflictPolicy::ExcludeActive, &mut ids)
            .unwrap();

        let result = store.save_form(&filled_form(), None, SelfConflictPolicy::ExcludeActive, &mut ids);

        assert!(result.as_ref().is_err_and(|e| e.is_conflict()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_form_update_keeps_case_number_and_takes_form_date() {
        let mut store = SessionStore::new();
        let mut ids = SequentialCaseNumbers::default();
        store
            .save_form(&filled_form(), None, SelfConflictPolicy::ExcludeActive, &mut ids)
            .unwrap();

        let mut form = filled_form();
        form.selected_date = Some("January 6, 2025".to_string());
        form.session_timing.minute = "30".to_string();

        let outcome = store
            .save_form(&form, Some("case-1"), SelfConflictPolicy::ExcludeActive, &mut ids)
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Updated("case-1".into()));
        assert_eq!(outcome.message(), "Session updated");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("case-1"), Some(&form.to_session("case-1")));
    }

    #[test]
    fn test_unchanged_edit_depends_on_policy() {
        let mut store = SessionStore::new();
        let mut ids = SequentialCaseNumbers::default();
        store
            .save_form(&filled_form(), None, SelfConflictPolicy::ExcludeActive, &mut ids)
            .unwrap();

        let excluded = store.save_form(
            &filled_form(),
            Some("case-1"),
            SelfConflictPolicy::ExcludeActive,
            &mut ids,
        );
        assert!(excluded.is_ok());

        let included = store.save_form(
            &filled_form(),
            Some("case-1"),
            SelfConflictPolicy::IncludeActive,
            &mut ids,
        );
        assert!(included.is_err_and(|e| e.is_conflict()));
    }

    #[test]
    fn test_save_form_active_but_missing_reinserts_same_id() {
        let mut store = SessionStore::new();

        let outcome = store
            .save_form(
                &filled_form(),
                Some("case-7"),
                SelfConflictPolicy::ExcludeActive,
                &mut SequentialCaseNumbers::default(),
            )
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Updated("case-7".into()));
        assert_eq!(store.len(), 1);
        assert!(store.contains("case-7"));
    }
}
