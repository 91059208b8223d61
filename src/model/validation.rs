use thiserror::Error;

/// Message shown under the table once an add is refused for lack of space.
pub const TABLE_FULL_MESSAGE: &str = "Table is full. Please clear and add new data.";

/// User-facing messages attached to the name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormMessage {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("this name has already been taken")]
    NameTaken,
}

/// Checks that a draft name may be committed.
///
/// Only the empty string is rejected; uniqueness is the name validator's job.
pub fn validate_name(name: &str) -> Result<(), FormMessage> {
    if name.is_empty() {
        Err(FormMessage::EmptyName)
    } else {
        Ok(())
    }
}
