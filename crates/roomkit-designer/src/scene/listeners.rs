//! Selection-changed observers.

use roomkit_core::SubscriptionId;
use std::fmt;

use crate::model::FurnitureItem;

type SelectionCallback = Box<dyn Fn(Option<&FurnitureItem>)>;

/// Registered selection observers, notified in subscription order.
#[derive(Default)]
pub(crate) struct SelectionListeners {
    entries: Vec<(SubscriptionId, SelectionCallback)>,
}

impl SelectionListeners {
    pub(crate) fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&FurnitureItem>) + 'static,
    {
        let id = SubscriptionId::new();
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns `true` when a subscription was removed.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&self, selected: Option<&FurnitureItem>) {
        for (_, callback) in &self.entries {
            callback(selected);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for SelectionListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionListeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
