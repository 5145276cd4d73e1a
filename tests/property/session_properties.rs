// Property-based tests for the session store, validator and conflict check

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::session;
use proptest::prelude::*;
use session_scheduler::models::session::{EmailAddresses, Period, SessionTime};
use session_scheduler::services::session::{
    is_session_conflict, validate_session_form, SessionStore,
};
use std::collections::HashSet;

const DATES: [&str; 3] = ["January 5, 2025", "January 6, 2025", "February 1, 2025"];

fn period() -> impl Strategy<Value = Period> {
    prop_oneof![Just(Period::Am), Just(Period::Pm)]
}

fn timing() -> impl Strategy<Value = SessionTime> {
    (1..=12u32, prop::sample::select(vec!["00", "15", "30", "45"]), period())
        .prop_map(|(hour, minute, period)| SessionTime::new(hour.to_string(), minute, period))
}

/// Time where any part may be left unpicked
fn partial_timing() -> impl Strategy<Value = SessionTime> {
    (
        prop_oneof![Just(String::new()), (1..=12u32).prop_map(|h| h.to_string())],
        prop_oneof![Just(String::new()), Just("00".to_string()), Just("30".to_string())],
        prop::option::of(period()),
    )
        .prop_map(|(hour, minute, period)| SessionTime {
            hour,
            minute,
            period,
        })
}

fn email() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z]{1,6}@[a-z]{1,6}\\.com"]
}

proptest! {
    /// Property: no sequence of upserts leaves two records with one case number
    #[test]
    fn prop_case_numbers_stay_unique(
        ops in prop::collection::vec((0..5u32, prop::sample::select(DATES.to_vec()), timing()), 0..40),
    ) {
        let mut store = SessionStore::new();
        for (id, date, time) in ops {
            store.upsert(session(&format!("case-{}", id), date, time));
        }

        let ids: HashSet<_> = store.iter().map(|s| s.case_number.as_str()).collect();
        prop_assert_eq!(ids.len(), store.len());
    }

    /// Property: upserting an existing case number never changes the store size
    #[test]
    fn prop_update_keeps_size(
        count in 1..10usize,
        pick in any::<prop::sample::Index>(),
        time in timing(),
    ) {
        let mut store = SessionStore::new();
        for i in 0..count {
            store.upsert(session(&format!("case-{}", i), DATES[0], SessionTime::new("9", "00", Period::Am)));
        }

        let target = format!("case-{}", pick.index(count));
        store.upsert(session(&target, DATES[1], time.clone()));

        prop_assert_eq!(store.len(), count);
        prop_assert_eq!(&store.get(&target).unwrap().session_timing, &time);
    }

    /// Property: deleting an unknown case number leaves the store untouched
    #[test]
    fn prop_delete_unknown_is_noop(count in 0..10usize, time in timing()) {
        let mut store = SessionStore::new();
        for i in 0..count {
            store.upsert(session(&format!("case-{}", i), DATES[0], time.clone()));
        }
        let before = store.clone();

        prop_assert!(store.delete("missing").is_none());
        prop_assert_eq!(store, before);
    }

    /// Property: the form is valid iff the time is complete and both emails are present
    #[test]
    fn prop_validator_accepts_only_complete_forms(
        time in partial_timing(),
        claimant in email(),
        respondent in email(),
    ) {
        let emails = EmailAddresses::new(claimant.clone(), respondent.clone());
        let expected = time.is_complete() && !claimant.is_empty() && !respondent.is_empty();
        prop_assert_eq!(validate_session_form(&time, &emails).is_ok(), expected);
    }

    /// Property: a conflict is reported iff another record shares date, hour, minute and period
    #[test]
    fn prop_conflict_matches_exact_slot(
        stored in prop::collection::vec((prop::sample::select(DATES.to_vec()), timing()), 0..8),
        date in prop::sample::select(DATES.to_vec()),
        time in timing(),
    ) {
        let sessions: Vec<_> = stored
            .iter()
            .enumerate()
            .map(|(i, (d, t))| session(&format!("case-{}", i), d, t.clone()))
            .collect();

        let expected = stored.iter().any(|(d, t)| *d == date && *t == time);
        prop_assert_eq!(is_session_conflict(&sessions, date, &time, None), expected);
    }

    /// Property: the excluded case number never conflicts with itself
    #[test]
    fn prop_excluded_session_is_skipped(date in prop::sample::select(DATES.to_vec()), time in timing()) {
        let sessions = vec![session("case-1", date, time.clone())];
        prop_assert!(!is_session_conflict(&sessions, date, &time, Some("case-1")));
        prop_assert!(is_session_conflict(&sessions, date, &time, None));
    }
}
