//! Listener registration handles
//!
//! Observers registered with the editor (for example the selection-changed
//! notification) are identified by a `SubscriptionId` so the shell can
//! remove them again.

use uuid::Uuid;

/// Subscription handle for unsubscribing a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}
