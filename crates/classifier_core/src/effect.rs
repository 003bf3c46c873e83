use crate::{Generation, JobRecord};

/// Side effects requested by [`crate::update`]; executed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `record` to the classification service. The settle message must
    /// echo `generation` back.
    Classify {
        generation: Generation,
        record: JobRecord,
    },
}
