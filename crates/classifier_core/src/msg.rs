use crate::{ClassificationResult, Generation, JobField};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited one of the form fields.
    FieldEdited { field: JobField, value: String },
    /// User asked for the illustrative sample posting.
    SampleRequested,
    /// User clicked Reset: clears the form and the result panel.
    ResetClicked,
    /// User clicked Classify.
    SubmitClicked,
    /// User closed the error panel.
    ErrorDismissed,
    /// The classification service answered and the body was normalized.
    ClassificationSucceeded {
        generation: Generation,
        result: ClassificationResult,
    },
    /// The request could not be completed.
    ClassificationFailed {
        generation: Generation,
        reason: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
