use crate::JobRecord;

/// Returns true iff the record carries a non-blank title and description.
///
/// The other three fields are optional and never affect the outcome.
pub fn can_submit(record: &JobRecord) -> bool {
    !record.title.trim().is_empty() && !record.description.trim().is_empty()
}
