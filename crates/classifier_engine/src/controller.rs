use std::sync::Arc;
use std::time::Duration;

use classifier_core::{update, AppState, AppViewModel, Effect, JobField, Msg, SubmitOutcome};
use classifier_logging::{classifier_debug, classifier_info, classifier_warn};

use crate::{
    normalize, Classifier, ClientSettings, EngineDisconnected, EngineEvent, EngineHandle,
};

/// Owns one form/result pair and the engine that serves its requests.
///
/// All methods are synchronous. Responses are picked up by [`Self::pump`]
/// or [`Self::wait_for_settle`] and are folded into the state only if they
/// still belong to the current generation.
pub struct SubmissionController {
    state: AppState,
    engine: EngineHandle,
}

impl SubmissionController {
    pub fn new(settings: ClientSettings) -> Self {
        classifier_info!("Classifier endpoint {}", settings.endpoint_base_url);
        Self::with_engine(EngineHandle::new(settings))
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self::with_engine(EngineHandle::with_classifier(classifier))
    }

    fn with_engine(engine: EngineHandle) -> Self {
        Self {
            state: AppState::new(),
            engine,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    pub fn update_field(&mut self, field: JobField, value: impl Into<String>) {
        self.dispatch(Msg::FieldEdited {
            field,
            value: value.into(),
        });
    }

    pub fn load_sample(&mut self) {
        self.dispatch(Msg::SampleRequested);
    }

    pub fn reset(&mut self) {
        if let Some(generation) = self.state.in_flight() {
            classifier_debug!("Reset with request {} still in flight", generation);
        }
        self.dispatch(Msg::ResetClicked);
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(Msg::ErrorDismissed);
    }

    /// Stops the engine. An outstanding request settles as a failure on the
    /// next [`Self::pump`] or [`Self::wait_for_settle`], and later submits
    /// fail immediately.
    pub fn shutdown(&mut self) {
        classifier_info!("Shutting down classifier engine");
        self.engine.shutdown();
    }

    /// Attempts a submission. Refusals are reported here and change nothing.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.state.check_submit();
        match outcome {
            SubmitOutcome::Started => self.dispatch(Msg::SubmitClicked),
            SubmitOutcome::NotSubmittable => {
                classifier_debug!("Submit refused: title and description are required");
            }
            SubmitOutcome::AlreadyInFlight => {
                classifier_debug!("Submit ignored: a request is already in flight");
            }
        }
        outcome
    }

    /// Applies every settled response that is ready, without blocking.
    /// Returns how many were applied. A lost engine counts as one failed
    /// settle for the outstanding request.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.engine.try_recv() {
                Ok(Some(event)) => {
                    self.apply_event(event);
                    applied += 1;
                }
                Ok(None) => break,
                Err(lost) => {
                    if self.fail_outstanding(lost) {
                        applied += 1;
                    }
                    break;
                }
            }
        }
        applied
    }

    /// Blocks until one response settles or `timeout` elapses.
    pub fn wait_for_settle(&mut self, timeout: Duration) -> bool {
        match self.engine.recv_timeout(timeout) {
            Ok(Some(event)) => {
                self.apply_event(event);
                true
            }
            Ok(None) => false,
            Err(lost) => self.fail_outstanding(lost),
        }
    }

    /// Settles the outstanding request as failed once the engine is gone.
    /// Returns false when nothing was outstanding.
    fn fail_outstanding(&mut self, lost: EngineDisconnected) -> bool {
        let Some(generation) = self.state.in_flight() else {
            return false;
        };
        classifier_warn!("Request {} lost: {}", generation, lost);
        self.dispatch(Msg::ClassificationFailed {
            generation,
            reason: lost.to_string(),
        });
        true
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Classify { generation, record } => {
                    classifier_info!(
                        "Classify generation={} title_len={} description_len={}",
                        generation,
                        record.title.len(),
                        record.description.len()
                    );
                    if !self.engine.classify(generation, record) {
                        classifier_warn!("Classifier engine is not running");
                        self.dispatch(Msg::ClassificationFailed {
                            generation,
                            reason: EngineDisconnected.to_string(),
                        });
                    }
                }
            }
        }
    }

    fn apply_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Settled { generation, result } => {
                if generation != self.state.generation() {
                    classifier_info!(
                        "Discarding response for generation {} (current {})",
                        generation,
                        self.state.generation()
                    );
                }
                let msg = match result {
                    Ok(raw) => Msg::ClassificationSucceeded {
                        generation,
                        result: normalize(&raw.body),
                    },
                    Err(err) => {
                        classifier_warn!("Classification failed: {}", err);
                        Msg::ClassificationFailed {
                            generation,
                            reason: err.to_string(),
                        }
                    }
                };
                self.dispatch(msg);
            }
        }
    }
}
