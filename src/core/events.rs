//! Drawable change notifications
//!
//! Observers (a view or controller) register callbacks to schedule a
//! redraw when a drawable reports a change.

use serde::Serialize;
use tracing::trace;

/// Which aspect of a drawable changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangedField {
    Data,
    Transform,
    Color,
    Metadata,
    Displayed,
}

/// Notification payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawableChanged {
    pub field: ChangedField,
}

impl DrawableChanged {
    pub fn new(field: ChangedField) -> Self {
        Self { field }
    }
}

/// Handle returned by `Listeners::add`, used for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<'a> = Box<dyn FnMut(&DrawableChanged) + 'a>;

/// Registered change callbacks, fired in registration order
#[derive(Default)]
pub struct Listeners<'a> {
    callbacks: Vec<(ListenerId, Callback<'a>)>,
    next_id: u64,
}

impl<'a> Listeners<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&DrawableChanged) + 'a,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(f)));
        id
    }

    /// Returns false if `id` was not registered
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cid, _)| *cid != id);
        self.callbacks.len() != before
    }

    pub fn fire(&mut self, event: DrawableChanged) {
        trace!(field = ?event.field, listeners = self.callbacks.len(), "Drawable changed");
        for (_, cb) in &mut self.callbacks {
            cb(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for Listeners<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
