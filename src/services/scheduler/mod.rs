//! Scheduler controller.
//!
//! All widget state (store, dialog form, drawer, view mode) lives in one
//! serializable [`SchedulerState`]. User intents arrive as
//! [`SchedulerEvent`]s and [`SchedulerState::apply`] turns the old state
//! into the new one, plus at most one notification to show.

use serde::{Deserialize, Serialize};

use crate::models::notification::Notification;
use crate::models::session::{Period, ScheduledSession, SessionForm};
use crate::models::ui::ViewMode;
use crate::services::session::{CaseNumberSource, SelfConflictPolicy, SessionStore};

/// Dialog lifecycle. `Edit` carries the active session's case number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "caseNumber", rename_all = "camelCase")]
pub enum DialogMode {
    #[default]
    Closed,
    New,
    Edit(String),
}

impl DialogMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogMode::Closed)
    }

    pub fn active_case_number(&self) -> Option<&str> {
        match self {
            DialogMode::Edit(case_number) => Some(case_number),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DialogMode::Edit(_) => "Edit Scheduled Session",
            _ => "Schedule a Session",
        }
    }
}

/// User intents forwarded by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerEvent {
    /// A grid cell was clicked; carries its full date label
    DateSelected(String),
    /// The edit icon of a listed session was clicked
    EditRequested(ScheduledSession),
    /// Leave edit mode and start a new session on the same date
    ScheduleAnother,
    HourSelected(String),
    MinuteSelected(String),
    PeriodSelected(Period),
    ClaimantEmailChanged(String),
    RespondentEmailChanged(String),
    SaveRequested,
    CancelRequested,
    DeleteRequested(String),
    ViewModeChanged(ViewMode),
    SessionListOpened,
    SessionListClosed,
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SchedulerState,
    pub notification: Option<Notification>,
}

impl Transition {
    fn quiet(state: SchedulerState) -> Self {
        Self {
            state,
            notification: None,
        }
    }

    fn notify(state: SchedulerState, notification: Notification) -> Self {
        Self {
            state,
            notification: Some(notification),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerState {
    pub store: SessionStore,
    pub form: SessionForm,
    pub dialog: DialogMode,
    pub view_mode: ViewMode,
    pub show_session_list: bool,
    pub conflict_policy: SelfConflictPolicy,
}

impl SchedulerState {
    pub fn new(view_mode: ViewMode, conflict_policy: SelfConflictPolicy) -> Self {
        Self {
            view_mode,
            conflict_policy,
            ..Self::default()
        }
    }

    /// The stored session currently loaded into the dialog
    pub fn active_session(&self) -> Option<&ScheduledSession> {
        self.dialog
            .active_case_number()
            .and_then(|case_number| self.store.get(case_number))
    }

    /// Apply one user intent.
    pub fn apply(mut self, event: SchedulerEvent, ids: &mut dyn CaseNumberSource) -> Transition {
        match event {
            SchedulerEvent::DateSelected(date) if self.dialog.is_open() => {
                log::debug!("Ignoring click on {} while the dialog is open", date);
                Transition::quiet(self)
            }
            SchedulerEvent::EditRequested(session) if self.dialog.is_open() => {
                log::debug!(
                    "Ignoring edit of {} while the dialog is open",
                    session.case_number
                );
                Transition::quiet(self)
            }
            SchedulerEvent::DateSelected(date) => {
                match self.store.first_on_date(&date) {
                    Some(existing) => {
                        log::debug!("Opening session {} booked on {}", existing.case_number, date);
                        self.form = SessionForm::from_session(existing);
                        self.dialog = DialogMode::Edit(existing.case_number.clone());
                    }
                    None => {
                        log::debug!("Opening new session dialog for {}", date);
                        self.form = SessionForm::for_date(date);
                        self.dialog = DialogMode::New;
                    }
                }
                Transition::quiet(self)
            }
            SchedulerEvent::EditRequested(session) => {
                log::debug!("Editing session {}", session.case_number);
                self.form = SessionForm::from_session(&session);
                self.dialog = DialogMode::Edit(session.case_number);
                self.show_session_list = false;
                Transition::quiet(self)
            }
            SchedulerEvent::ScheduleAnother => {
                if let DialogMode::Edit(_) = self.dialog {
                    self.form.clear_details();
                    self.dialog = DialogMode::New;
                }
                Transition::quiet(self)
            }
            SchedulerEvent::HourSelected(hour) => self.edit_form(|form| form.session_timing.hour = hour),
            SchedulerEvent::MinuteSelected(minute) => {
                self.edit_form(|form| form.session_timing.minute = minute)
            }
            SchedulerEvent::PeriodSelected(period) => {
                self.edit_form(|form| form.session_timing.period = Some(period))
            }
            SchedulerEvent::ClaimantEmailChanged(email) => {
                self.edit_form(|form| form.email_addresses.claimant_email = email)
            }
            SchedulerEvent::RespondentEmailChanged(email) => {
                self.edit_form(|form| form.email_addresses.respondent_email = email)
            }
            SchedulerEvent::SaveRequested => self.save(ids),
            SchedulerEvent::CancelRequested => {
                self.close_dialog();
                Transition::quiet(self)
            }
            SchedulerEvent::DeleteRequested(case_number) => {
                match self.store.delete(&case_number) {
                    Some(_) => log::info!("Deleted session {}", case_number),
                    None => log::debug!("Delete requested for unknown session {}", case_number),
                }
                if self.dialog.active_case_number() == Some(case_number.as_str()) {
                    self.close_dialog();
                }
                Transition::notify(self, Notification::success("Session deleted"))
            }
            SchedulerEvent::ViewModeChanged(view_mode) => {
                self.view_mode = view_mode;
                Transition::quiet(self)
            }
            SchedulerEvent::SessionListOpened => {
                self.show_session_list = true;
                Transition::quiet(self)
            }
            SchedulerEvent::SessionListClosed => {
                self.show_session_list = false;
                Transition::quiet(self)
            }
        }
    }

    fn edit_form(mut self, update: impl FnOnce(&mut SessionForm)) -> Transition {
        if self.dialog.is_open() {
            update(&mut self.form);
        } else {
            log::debug!("Ignoring form edit while the dialog is closed");
        }
        Transition::quiet(self)
    }

    fn save(mut self, ids: &mut dyn CaseNumberSource) -> Transition {
        if !self.dialog.is_open() {
            return Transition::quiet(self);
        }

        let active = self.dialog.active_case_number().map(str::to_owned);
        match self
            .store
            .save_form(&self.form, active.as_deref(), self.conflict_policy, ids)
        {
            Ok(outcome) => {
                log::info!("{}: {}", outcome.message(), outcome.case_number());
                let notification = Notification::success(outcome.message());
                self.close_dialog();
                Transition::notify(self, notification)
            }
            Err(err) => {
                log::warn!("Session not saved: {}", err);
                let notification = if err.is_conflict() {
                    Notification::warning(err.to_string())
                } else {
                    Notification::error(err.to_string())
                };
                Transition::notify(self, notification)
            }
        }
    }

    fn close_dialog(&mut self) {
        self.dialog = DialogMode::Closed;
        self.form = SessionForm::default();
    }
}
