use crate::api::ApiError;
use crate::model::Location;

/// Results of asynchronous work, delivered back to the
/// [`FormController`](super::FormController) on the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The startup location fetch finished.
    LocationsLoaded(Result<Vec<Location>, ApiError>),
    /// The debounce window for validation request `seq` elapsed.
    ValidationDue { seq: u64 },
    /// The name validator answered request `seq` about `name`.
    NameChecked {
        seq: u64,
        name: String,
        result: Result<bool, ApiError>,
    },
}
