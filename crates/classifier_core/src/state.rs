use crate::view_model::AppViewModel;
use crate::{can_submit, sample_job_record, ClassificationResult, JobField, JobRecord};

/// Tag for a request; bumped by every reset so late responses can be recognised.
pub type Generation = u64;

const UNREACHABLE_HINT: &str = "The classification service may be unreachable; \
                                make sure it is running at the configured endpoint.";

/// What the UI currently displays. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(ClassificationResult),
    Failure(String),
}

/// Synchronous answer to a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started,
    /// Title or description is blank; nothing was sent.
    NotSubmittable,
    /// A request is still outstanding; the attempt was ignored.
    AlreadyInFlight,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    form: JobRecord,
    view_state: ViewState,
    generation: Generation,
    in_flight: Option<Generation>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn form(&self) -> &JobRecord {
        &self.form
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Generation of the request still awaiting a response, if any. This can
    /// be older than [`Self::generation`] when a reset orphaned the request.
    pub fn in_flight(&self) -> Option<Generation> {
        self.in_flight
    }

    /// Decides what a submit would do right now, without changing anything.
    pub fn check_submit(&self) -> SubmitOutcome {
        if self.in_flight.is_some() || self.view_state == ViewState::Loading {
            SubmitOutcome::AlreadyInFlight
        } else if !can_submit(&self.form) {
            SubmitOutcome::NotSubmittable
        } else {
            SubmitOutcome::Started
        }
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn edit_field(&mut self, field: JobField, value: String) {
        if self.form.get(field) != value {
            self.form.set(field, value);
            self.mark_dirty();
        }
    }

    pub(crate) fn load_sample(&mut self) {
        self.form = sample_job_record();
        self.mark_dirty();
    }

    /// Clears the form and returns to Idle. An outstanding request is not
    /// cancelled, but its response will no longer match the generation.
    pub(crate) fn reset(&mut self) {
        self.form.clear();
        self.view_state = ViewState::Idle;
        self.generation += 1;
        self.mark_dirty();
    }

    pub(crate) fn dismiss_error(&mut self) {
        if matches!(self.view_state, ViewState::Failure(_)) {
            self.view_state = ViewState::Idle;
            self.mark_dirty();
        }
    }

    /// Moves to Loading and hands back the record to send, or `None` when
    /// [`Self::check_submit`] would refuse.
    pub(crate) fn begin_submission(&mut self) -> Option<(Generation, JobRecord)> {
        if self.check_submit() != SubmitOutcome::Started {
            return None;
        }
        self.view_state = ViewState::Loading;
        self.in_flight = Some(self.generation);
        self.mark_dirty();
        Some((self.generation, self.form.clone()))
    }

    pub(crate) fn apply_success(
        &mut self,
        generation: Generation,
        result: ClassificationResult,
    ) -> bool {
        self.settle(generation, ViewState::Success(result))
    }

    pub(crate) fn apply_failure(&mut self, generation: Generation, reason: &str) -> bool {
        self.settle(generation, ViewState::Failure(failure_message(reason)))
    }

    /// Returns false when the settle was stale and the view was left alone.
    fn settle(&mut self, generation: Generation, next: ViewState) -> bool {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
            self.mark_dirty();
        }
        if generation != self.generation || self.view_state != ViewState::Loading {
            return false;
        }
        self.view_state = next;
        self.mark_dirty();
        true
    }
}

fn failure_message(reason: &str) -> String {
    let reason = reason.trim().trim_end_matches('.');
    if reason.is_empty() {
        UNREACHABLE_HINT.to_string()
    } else {
        format!("{reason}. {UNREACHABLE_HINT}")
    }
}
