use super::{FormMessage, Location};

/// The in-progress (draft) inputs and flags shown by the form.
///
/// Transitions are plain setters; deciding *when* to apply them is the
/// controller's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    draft_name: String,
    draft_location: Option<Location>,
    message: Option<FormMessage>,
    table_full: bool,
}

impl FormState {
    /// Creates a blank form with the given default location selected.
    pub fn new(default_location: Option<Location>) -> Self {
        Self {
            draft_location: default_location,
            ..Self::default()
        }
    }

    /// Replaces the draft name and clears any message.
    pub fn set_name(&mut self, name: String) {
        self.draft_name = name;
        self.message = None;
    }

    pub fn set_location(&mut self, location: Option<Location>) {
        self.draft_location = location;
    }

    pub fn set_message(&mut self, message: FormMessage) {
        self.message = Some(message);
    }

    pub fn set_table_full(&mut self, full: bool) {
        self.table_full = full;
    }

    /// Empties the draft name and reselects `default_location`.
    ///
    /// Messages and the table-full flag are left alone.
    pub fn reset_draft(&mut self, default_location: Option<Location>) {
        self.draft_name.clear();
        self.draft_location = default_location;
    }

    /// Returns every field to its initial value.
    pub fn reset(&mut self, default_location: Option<Location>) {
        *self = Self::new(default_location);
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn draft_location(&self) -> Option<&Location> {
        self.draft_location.as_ref()
    }

    pub fn message(&self) -> Option<FormMessage> {
        self.message
    }

    pub fn table_full(&self) -> bool {
        self.table_full
    }
}
