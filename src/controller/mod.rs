//! The form controller: view state, transitions, and the debounced name check.

mod debounce;
mod event;
mod form;

pub use debounce::{Debouncer, TimerHandle};
pub use event::FormEvent;
pub use form::{AddOutcome, FormController, LoadState};
