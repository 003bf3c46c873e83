//! Classifier engine: HTTP client, response normalization and the
//! controller that runs the submission state machine against it.
mod client;
mod controller;
mod engine;
mod normalize;
mod types;

pub use client::{Classifier, ClientSettings, ReqwestClassifier, DEFAULT_ENDPOINT_BASE_URL};
pub use controller::SubmissionController;
pub use engine::EngineHandle;
pub use normalize::normalize;
pub use types::{EngineDisconnected, EngineEvent, RawResponse, TransportError, TransportErrorKind};
