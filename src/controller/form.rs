use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use super::debounce::Debouncer;
use super::event::FormEvent;
use crate::api::{LocationSource, NameValidator};
use crate::model::{
    FormMessage, FormState, Location, Row, RowBuffer, next_location, previous_location,
    validate_name,
};

/// Progress of the startup location fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// [`FormController::initialize`] has not been called.
    #[default]
    Idle,
    Loading,
    Ready,
    /// The fetch failed; the form carries on with no locations.
    Failed,
}

/// Result of [`FormController::on_add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The draft was committed into the given slot.
    Added(usize),
    /// Every slot was already populated; nothing was committed.
    TableFull,
    /// The draft failed validation and was kept for correction.
    Rejected(FormMessage),
}

/// Owns the form's view state and applies every user and network transition.
///
/// The controller never blocks: collaborator calls and the debounce timer run
/// as spawned tasks that report back through the `events` channel, and the
/// owner feeds those reports to [`handle_event`](Self::handle_event).
pub struct FormController<A> {
    api: Arc<A>,
    state: FormState,
    rows: RowBuffer,
    locations: Vec<Location>,
    load_state: LoadState,
    debouncer: Debouncer,
    debounce: Duration,
    /// Bumped whenever the draft name changes; only the latest request may apply.
    validation_seq: u64,
    events: UnboundedSender<FormEvent>,
}

impl<A> FormController<A>
where
    A: LocationSource + NameValidator + 'static,
{
    /// Creates a controller with an empty table and no locations yet.
    pub fn new(api: Arc<A>, debounce: Duration, events: UnboundedSender<FormEvent>) -> Self {
        Self {
            api,
            state: FormState::default(),
            rows: RowBuffer::new(),
            locations: Vec::new(),
            load_state: LoadState::Idle,
            debouncer: Debouncer::new(),
            debounce,
            validation_seq: 0,
            events,
        }
    }

    /// Starts the one-time location fetch. No retry is attempted.
    pub fn initialize(&mut self) {
        self.load_state = LoadState::Loading;
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.fetch_locations().await;
            if events.send(FormEvent::LocationsLoaded(result)).is_err() {
                tracing::trace!("location fetch finished after shutdown");
            }
        });
    }

    /// Replaces the draft name and restarts the validation debounce.
    pub fn on_name_change(&mut self, value: impl Into<String>) {
        self.state.set_name(value.into());
        self.validation_seq += 1;
        self.debouncer.schedule(
            self.debounce,
            self.events.clone(),
            FormEvent::ValidationDue {
                seq: self.validation_seq,
            },
        );
    }

    pub fn on_location_change(&mut self, location: Location) {
        self.state.set_location(Some(location));
    }

    /// Moves the location selection forward, wrapping at the end.
    pub fn select_next_location(&mut self) {
        if let Some(next) = next_location(&self.locations, self.state.draft_location()) {
            self.state.set_location(Some(next.clone()));
        }
    }

    /// Moves the location selection back, wrapping at the start.
    pub fn select_previous_location(&mut self) {
        if let Some(prev) = previous_location(&self.locations, self.state.draft_location()) {
            self.state.set_location(Some(prev.clone()));
        }
    }

    /// Commits the draft into the first empty row.
    ///
    /// An empty name is rejected and the draft kept. Otherwise the draft is
    /// reset whether or not a slot was free.
    pub fn on_add(&mut self) -> AddOutcome {
        if let Err(message) = validate_name(self.state.draft_name()) {
            self.state.set_message(message);
            return AddOutcome::Rejected(message);
        }

        let row = Row::new(
            self.state.draft_name(),
            self.state.draft_location().cloned(),
        );
        let outcome = match self.rows.insert(row) {
            Ok(slot) => {
                tracing::info!(slot, "row added");
                self.state.set_table_full(false);
                AddOutcome::Added(slot)
            }
            Err(full) => {
                tracing::info!("add refused: {full}");
                self.state.set_table_full(true);
                AddOutcome::TableFull
            }
        };

        self.invalidate_validation();
        let default = self.default_location();
        self.state.reset_draft(default);
        outcome
    }

    /// Empties the table and resets the draft, message and flags.
    ///
    /// Locations are kept; nothing is re-fetched.
    pub fn on_clear(&mut self) {
        self.invalidate_validation();
        self.rows.clear();
        let default = self.default_location();
        self.state.reset(default);
        tracing::info!("form cleared");
    }

    /// Applies the result of asynchronous work.
    pub fn handle_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::LocationsLoaded(Ok(locations)) => {
                tracing::info!(count = locations.len(), "locations loaded");
                self.locations = locations;
                self.load_state = LoadState::Ready;
                let default = self.default_location();
                self.state.set_location(default);
            }
            FormEvent::LocationsLoaded(Err(e)) => {
                tracing::warn!("location fetch failed, continuing without locations: {e}");
                self.locations.clear();
                self.load_state = LoadState::Failed;
                self.state.set_location(None);
            }
            FormEvent::ValidationDue { seq } => self.start_validation(seq),
            FormEvent::NameChecked { seq, name, result } => {
                if seq != self.validation_seq {
                    tracing::debug!(seq, latest = self.validation_seq, "dropping stale name check");
                    return;
                }
                match result {
                    Ok(true) => tracing::debug!(name = %name, "name available"),
                    Ok(false) => {
                        tracing::debug!(name = %name, "name taken");
                        self.state.set_message(FormMessage::NameTaken);
                    }
                    Err(e) => {
                        tracing::warn!(name = %name, "name check failed, assuming available: {e}");
                    }
                }
            }
        }
    }

    /// Calls the validator with the draft name as it is now.
    fn start_validation(&mut self, seq: u64) {
        if seq != self.validation_seq {
            tracing::trace!(seq, "superseded validation timer");
            return;
        }
        let name = self.state.draft_name().to_string();
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.check_name_valid(&name).await;
            if events
                .send(FormEvent::NameChecked { seq, name, result })
                .is_err()
            {
                tracing::trace!("name check finished after shutdown");
            }
        });
    }

    /// Cancels the pending timer and orphans any check already in flight.
    fn invalidate_validation(&mut self) {
        self.debouncer.cancel();
        self.validation_seq += 1;
    }

    fn default_location(&self) -> Option<Location> {
        self.locations.first().cloned()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn rows(&self) -> &RowBuffer {
        &self.rows
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Returns `true` while a validation timer is waiting to fire.
    pub fn validation_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
