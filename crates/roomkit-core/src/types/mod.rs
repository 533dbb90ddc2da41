//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` and `Arc<RwLock<HashMap>>`.

pub mod aliases;

pub use aliases::*;
