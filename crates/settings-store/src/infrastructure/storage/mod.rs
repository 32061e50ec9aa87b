//! Storage infrastructure: settings file persistence.
//!
//! The `settings_store` sub-module handles:
//!
//! - Reading the INI settings file, or creating it from defaults on first run.
//! - Writing every change back to disk as soon as it is made.
//!
//! Keeping storage concerns here means the file format can change without
//! touching the code that consumes settings.

pub mod settings_store;
