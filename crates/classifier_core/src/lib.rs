//! Job classifier core: pure form model, submission state machine and
//! view-model helpers. Nothing in here performs IO.
mod effect;
mod form;
mod msg;
mod result;
mod state;
mod update;
mod validation;
mod view_model;

pub use effect::Effect;
pub use form::{sample_job_record, JobField, JobRecord};
pub use msg::Msg;
pub use result::{ClassificationResult, Prediction, LOW_CONFIDENCE_THRESHOLD};
pub use state::{AppState, Generation, SubmitOutcome, ViewState};
pub use update::update;
pub use validation::can_submit;
pub use view_model::{
    AppViewModel, ProbabilityView, ResultPanelView, VerdictTrack, LOW_CONFIDENCE_ADVISORY,
};
