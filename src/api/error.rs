/// Errors reported by the form's remote collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The service could not be reached or refused the call.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}
