//! # settings-core
//!
//! Shared library for persisting small key/value application settings in a
//! human-editable INI file.
//!
//! This crate has no file-system or logging dependencies; the
//! `settings-store` crate wraps it with loading, saving and path handling.
//!
//! - **`domain`** – the [`ConfigStore`]: an ordered section → option → value
//!   map whose names keep their original casing but are matched
//!   case-insensitively, plus the [`DefaultSchema`] used to bootstrap a new
//!   settings file.
//!
//! - **`format`** – the INI parser and serializer.  Serialization is
//!   deterministic, so saving an unchanged store rewrites identical bytes.

pub mod domain;
pub mod format;

// Re-export the most-used types at the crate root so callers can write
// `settings_core::ConfigStore` instead of `settings_core::domain::store::ConfigStore`.
pub use domain::schema::{DefaultSchema, SchemaEntry, APP_DEFAULTS};
pub use domain::store::{eq_ignore_case, ConfigStore, ResolvedKey, Section};
pub use domain::value::SettingValue;
pub use format::ini::{IniError, NameError};
