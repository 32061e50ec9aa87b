//! Application layer: what the rest of the program does with its settings.
//!
//! Components that need settings receive a [`SettingsAccess`] implementation
//! (normally the one [`crate::SettingsStore`] created at startup) instead of
//! reaching for a global.  Tests substitute `MockSettingsAccess`.
//!
//! **Dependency rule**: this layer depends on `settings_core` only; the
//! `infrastructure` layer depends on it, never the other way round.

pub mod interface;
pub mod recent_file;

/// Read/write access to a case-insensitive settings store.
///
/// Implementations match `section` and `option` case-insensitively and never
/// fail: misses return `None`, write failures are handled (logged) inside
/// the implementation.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsAccess {
    /// Returns the stored value, or `None` if the section or option is absent.
    fn get(&self, section: &str, option: &str) -> Option<String>;

    /// Stores `value` under `section`/`option`.
    fn set(&mut self, section: &str, option: &str, value: &str);
}
