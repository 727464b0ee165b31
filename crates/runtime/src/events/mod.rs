//! Topic-based event bus for runtime events.
//!
//! The game worker publishes a [`GameEvent`] for every registration,
//! deletion and action it handles; consumers subscribe per [`Topic`].

mod bus;
mod types;

pub use bus::{EventBus, Topic};
pub use types::GameEvent;
