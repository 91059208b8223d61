//! Remote collaborators of the form: where locations come from and who
//! decides whether a name is taken.

mod error;
mod mock;

use async_trait::async_trait;

use crate::model::Location;

pub use error::ApiError;
pub use mock::MockApi;

/// Supplies the ordered list of selectable locations.
///
/// Order matters: the first location is the form's default selection.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn fetch_locations(&self) -> Result<Vec<Location>, ApiError>;
}

/// Reports whether a candidate name is still available.
#[async_trait]
pub trait NameValidator: Send + Sync {
    /// Returns `true` if `candidate` is available, `false` if it is taken.
    async fn check_name_valid(&self, candidate: &str) -> Result<bool, ApiError>;
}
