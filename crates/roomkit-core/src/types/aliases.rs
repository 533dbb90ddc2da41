//! Type aliases for commonly used complex types.
//!
//! Complex types like `Rc<RefCell<Vec<T>>>` are hard to read at a glance.
//! The aliases below give them names that convey intent and keep the same
//! pattern consistent across crates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomkit_core::types::*;
//!
//! // Instead of: Rc<RefCell<Vec<String>>>
//! let log: SharedVec<String> = shared_vec();
//! log.borrow_mut().push("selected".into());
//! ```

use parking_lot::RwLock;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// The editor runs on one dispatch thread; listeners that need to record
/// state capture one of these.
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<RwLock<T>>)
// =============================================================================

/// A thread-safe reader-writer hash map for read-mostly caches.
///
/// Multiple readers can access concurrently, writes require exclusive access.
pub type ThreadSafeRwMap<K, V> = Arc<RwLock<HashMap<K, V>>>;

// =============================================================================
// CONSTRUCTOR HELPERS
// =============================================================================

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new empty `SharedVec<T>`.
#[inline]
pub fn shared_vec<T>() -> SharedVec<T> {
    Rc::new(RefCell::new(Vec::new()))
}

/// Create a new empty `ThreadSafeRwMap<K, V>`.
#[inline]
pub fn thread_safe_rw_map<K, V>() -> ThreadSafeRwMap<K, V> {
    Arc::new(RwLock::new(HashMap::new()))
}
