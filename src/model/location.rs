use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable place, as supplied by a [`LocationSource`](crate::api::LocationSource).
///
/// Locations are opaque: the form never interprets the text, it only
/// displays it and copies it into committed rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a location from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the location text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[mutants::skip]
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the location after `current` in `all`, wrapping to the start.
///
/// With no current selection the first location is returned.
pub fn next_location<'a>(all: &'a [Location], current: Option<&Location>) -> Option<&'a Location> {
    let idx = current
        .and_then(|c| all.iter().position(|l| l == c))
        .map_or(0, |i| (i + 1) % all.len());
    all.get(idx)
}

/// Returns the location before `current` in `all`, wrapping to the end.
///
/// With no current selection the last location is returned.
pub fn previous_location<'a>(
    all: &'a [Location],
    current: Option<&Location>,
) -> Option<&'a Location> {
    let idx = match current.and_then(|c| all.iter().position(|l| l == c)) {
        Some(i) => (i + all.len() - 1) % all.len(),
        None => all.len().checked_sub(1)?,
    };
    all.get(idx)
}
