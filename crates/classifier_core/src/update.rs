use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldEdited { field, value } => {
            state.edit_field(field, value);
            Vec::new()
        }
        Msg::SampleRequested => {
            state.load_sample();
            Vec::new()
        }
        Msg::ResetClicked => {
            state.reset();
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The gate is re-checked here even if the front-end disabled the
            // button; a refused submit leaves the state untouched.
            match state.begin_submission() {
                Some((generation, record)) => vec![Effect::Classify { generation, record }],
                None => Vec::new(),
            }
        }
        Msg::ErrorDismissed => {
            state.dismiss_error();
            Vec::new()
        }
        Msg::ClassificationSucceeded { generation, result } => {
            state.apply_success(generation, result);
            Vec::new()
        }
        Msg::ClassificationFailed { generation, reason } => {
            state.apply_failure(generation, &reason);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
