//! Settings domain: the in-memory store and the built-in defaults.
//!
//! Nothing here touches the file system.  Loading and saving live in the
//! `settings-store` crate; this module only defines what a settings store
//! *is* and how names are matched.

/// Ordered, case-insensitive section/option store.
///
/// See [`store::ConfigStore`] for the main type.
pub mod store;

/// Default settings written when no valid settings file exists.
pub mod schema;

/// Typed values and their stored string form.
pub mod value;
