//! settings-store library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! Construct one [`SettingsStore`] at startup and hand it (or a
//! `&mut dyn SettingsAccess`) to the components that need settings:
//!
//! ```rust,no_run
//! use settings_store::SettingsStore;
//!
//! let mut settings = SettingsStore::default(); // ./config.ini
//! settings.set_remember_file(true);
//! settings.set_last_file("/home/me/reports/q3.xlsx");
//! println!("reopen: {:?}", settings.last_file_absolute());
//! ```

pub mod application;
pub mod infrastructure;

pub use application::SettingsAccess;
pub use infrastructure::fs::paths::{ensure_directory, to_absolute, to_relative, PathError};
pub use infrastructure::storage::settings_store::{SettingsStore, DEFAULT_SETTINGS_FILE};
