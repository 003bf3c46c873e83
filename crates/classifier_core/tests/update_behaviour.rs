use std::sync::Once;

use classifier_core::{
    sample_job_record, update, AppState, ClassificationResult, Effect, JobField, JobRecord, Msg,
    Prediction, SubmitOutcome, ViewState,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(classifier_logging::initialize_for_tests);
}

fn edit(state: AppState, field: JobField, value: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::FieldEdited {
            field,
            value: value.to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

fn filled_state() -> AppState {
    let state = edit(AppState::new(), JobField::Title, "Data Analyst");
    edit(state, JobField::Description, "Crunch numbers all day.")
}

fn success_result() -> ClassificationResult {
    ClassificationResult {
        prediction: Some(Prediction::Real),
        real_probability: Some(91.5),
        fake_probability: Some(8.5),
        confidence: Some(91.5),
    }
}

#[test]
fn new_state_is_idle_with_empty_form() {
    init_logging();
    let state = AppState::new();

    assert_eq!(*state.view_state(), ViewState::Idle);
    assert!(state.form().is_empty());
    assert_eq!(state.generation(), 0);
    assert_eq!(state.in_flight(), None);
    assert_eq!(state.check_submit(), SubmitOutcome::NotSubmittable);
}

#[test]
fn field_edits_update_only_that_field() {
    init_logging();
    let mut state = edit(AppState::new(), JobField::Benefits, "Remote work");

    assert_eq!(state.form().benefits, "Remote work");
    assert_eq!(state.form().title, "");
    assert!(state.consume_dirty());

    // Same value again is not a change.
    let mut state = edit(state, JobField::Benefits, "Remote work");
    assert!(!state.consume_dirty());
}

#[test]
fn load_sample_fills_all_fields_and_keeps_view_state() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SampleRequested);

    assert!(effects.is_empty());
    assert_eq!(*state.form(), sample_job_record());
    assert_eq!(state.form().title, "Software Engineer");
    assert_eq!(*state.view_state(), ViewState::Idle);
    assert_eq!(state.check_submit(), SubmitOutcome::Started);
}

#[test]
fn submit_with_blank_required_field_emits_nothing() {
    init_logging();
    let state = edit(AppState::new(), JobField::Title, "Engineer");
    let mut state = edit(state, JobField::Description, "   ");
    state.consume_dirty();

    assert_eq!(state.check_submit(), SubmitOutcome::NotSubmittable);
    let (mut next, effects) = update(state.clone(), Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert!(!next.consume_dirty());
}

#[test]
fn submit_moves_to_loading_and_emits_classify() {
    init_logging();
    let state = filled_state();
    let expected_record = state.form().clone();

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(*state.view_state(), ViewState::Loading);
    assert_eq!(state.in_flight(), Some(0));
    assert_eq!(
        effects,
        vec![Effect::Classify {
            generation: 0,
            record: expected_record,
        }]
    );
}

#[test]
fn second_submit_while_loading_is_ignored() {
    init_logging();
    let (state, first) = update(filled_state(), Msg::SubmitClicked);
    assert_eq!(first.len(), 1);
    assert_eq!(state.check_submit(), SubmitOutcome::AlreadyInFlight);

    let (next, second) = update(state.clone(), Msg::SubmitClicked);

    assert!(second.is_empty());
    assert_eq!(next, state);
}

#[test]
fn resubmission_overwrites_previous_terminal_state() {
    init_logging();
    let (state, _) = update(filled_state(), Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::ClassificationFailed {
            generation: 0,
            reason: "connection refused".to_string(),
        },
    );
    assert!(matches!(state.view_state(), ViewState::Failure(_)));

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(*state.view_state(), ViewState::Loading);
    assert_eq!(effects.len(), 1);

    let (state, _) = update(
        state,
        Msg::ClassificationSucceeded {
            generation: 0,
            result: success_result(),
        },
    );
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(*state.view_state(), ViewState::Loading);
    assert_eq!(effects.len(), 1);
}

#[test]
fn reset_clears_everything_from_any_state() {
    init_logging();
    let loading = update(filled_state(), Msg::SubmitClicked).0;
    let succeeded = update(
        loading.clone(),
        Msg::ClassificationSucceeded {
            generation: 0,
            result: success_result(),
        },
    )
    .0;
    let failed = update(
        loading.clone(),
        Msg::ClassificationFailed {
            generation: 0,
            reason: "boom".to_string(),
        },
    )
    .0;
    let sampled = update(AppState::new(), Msg::SampleRequested).0;

    for state in [AppState::new(), filled_state(), sampled, loading, succeeded, failed] {
        let before = state.generation();
        let (state, effects) = update(state, Msg::ResetClicked);

        assert!(effects.is_empty());
        assert_eq!(*state.form(), JobRecord::default());
        assert_eq!(*state.view_state(), ViewState::Idle);
        assert_eq!(state.generation(), before + 1);
    }
}

#[test]
fn dismissing_an_error_keeps_the_form() {
    init_logging();
    let (state, _) = update(filled_state(), Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::ClassificationFailed {
            generation: 0,
            reason: "http status 500".to_string(),
        },
    );
    let form_before = state.form().clone();

    let (state, effects) = update(state, Msg::ErrorDismissed);

    assert!(effects.is_empty());
    assert_eq!(*state.view_state(), ViewState::Idle);
    assert_eq!(*state.form(), form_before);
}

#[test]
fn dismiss_is_noop_outside_failure() {
    init_logging();
    let (mut loading, _) = update(filled_state(), Msg::SubmitClicked);
    loading.consume_dirty();

    let (mut next, _) = update(loading.clone(), Msg::ErrorDismissed);

    assert_eq!(next, loading);
    assert!(!next.consume_dirty());
}
