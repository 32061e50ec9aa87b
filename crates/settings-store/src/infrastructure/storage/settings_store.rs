//! INI-file-backed settings store.
//!
//! [`SettingsStore`] binds an in-memory [`ConfigStore`] to one file on disk:
//!
//! - On construction the file is parsed if it exists.  If it is missing, or
//!   cannot be read or parsed, the store is filled from the default schema
//!   and written out immediately.
//! - Every write is flushed to disk before the call returns.  There is no
//!   deferred or batched saving.
//!
//! # Failure convention
//!
//! No public operation returns an error or panics.  Each one logs failures
//! through `tracing::error!` and falls back to a documented value:
//!
//! | Failure                      | Fallback                                   |
//! |------------------------------|--------------------------------------------|
//! | file unreadable or malformed | defaults are used and written back          |
//! | file unwritable              | in-memory state is kept, not durable        |
//! | path conversion fails        | the unconverted path is used                |
//! | section/option missing       | `None` (not logged, not an error)           |
//! | name cannot be stored in INI | the write is skipped                        |
//!
//! This makes the store safe to call from UI code without error handling at
//! every call site.
//!
//! # Concurrency
//!
//! One instance per process, used from one thread.  Two stores (or two
//! processes) writing the same file will overwrite each other's changes;
//! callers that need sharing must wrap the store in their own `Mutex`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use settings_core::domain::schema::{
    is_true_literal, OPTION_LAST_FILE, SECTION_GENERAL,
};
use settings_core::format::ini;
use settings_core::{ConfigStore, DefaultSchema, IniError, NameError, SettingValue, APP_DEFAULTS};

use crate::application::{interface, recent_file, SettingsAccess};
use crate::infrastructure::fs::paths;

/// File name used when no path is given, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "config.ini";

/// Error type for settings file operations.
///
/// Public operations log these instead of returning them.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid INI.
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: IniError,
    },
}

/// Application settings persisted to an INI file.
///
/// See the [module documentation](self) for the load/save lifecycle and the
/// failure convention.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    store: ConfigStore,
}

impl SettingsStore {
    /// Opens the settings file at `path`, bootstrapping it from the
    /// application defaults if needed.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_schema(path, &APP_DEFAULTS)
    }

    /// Like [`SettingsStore::open`] with a custom default schema.
    pub fn open_with_schema(path: impl Into<PathBuf>, schema: &DefaultSchema) -> Self {
        let path = path.into();

        let loaded = if path.exists() {
            match load_file(&path) {
                Ok(store) => {
                    info!("settings loaded from {}", path.display());
                    Some(store)
                }
                Err(e) => {
                    error!("failed to load settings: {e}");
                    None
                }
            }
        } else {
            None
        };

        match loaded {
            Some(store) => Self { path, store },
            None => {
                let settings = Self {
                    path,
                    store: ConfigStore::with_defaults(schema),
                };
                settings.save();
                info!("default settings created at {}", settings.path.display());
                settings
            }
        }
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the in-memory settings.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    // ── Generic access ────────────────────────────────────────────────────────

    /// Returns the value of `section`/`option`, matched case-insensitively.
    pub fn get(&self, section: &str, option: &str) -> Option<String> {
        self.store.get(section, option).map(str::to_string)
    }

    /// Like [`SettingsStore::get`], returning `default` on a miss.
    pub fn get_or(&self, section: &str, option: &str, default: &str) -> String {
        self.get(section, option)
            .unwrap_or_else(|| default.to_string())
    }

    /// Stores `value`'s string form and saves the file.
    ///
    /// An existing section or option matching case-insensitively is updated
    /// and keeps its stored casing; otherwise it is created with the casing
    /// passed in.  Booleans are stored as `"True"`/`"False"`.
    ///
    /// Names the INI format cannot read back (empty, padded, containing a
    /// line break, or an option name with `=`/`:` or a leading `[`, `#` or
    /// `;`) are logged and the write is skipped, so the file stays loadable.
    pub fn set(&mut self, section: &str, option: &str, value: impl SettingValue) {
        if let Err(e) = check_names(section, option) {
            error!("refusing to store {section:?}.{option:?}: {e}");
            return;
        }
        let value = value.to_setting();
        let resolved = self.store.set(section, option, value.as_str());
        self.save();
        info!("setting {}.{} set to {value}", resolved.section, resolved.option);
    }

    /// Removes `section`/`option` and saves the file.  Returns the old value.
    pub fn remove(&mut self, section: &str, option: &str) -> Option<String> {
        let removed = self.store.remove(section, option)?;
        self.save();
        info!("setting {section}.{option} removed");
        Some(removed)
    }

    /// Returns `true` iff the stored value is the literal `"True"`.
    pub fn get_flag(&self, section: &str, option: &str) -> bool {
        self.store
            .get(section, option)
            .is_some_and(is_true_literal)
    }

    /// Stores `"True"` or `"False"`.
    pub fn set_flag(&mut self, section: &str, option: &str, value: bool) {
        self.set(section, option, value);
    }

    /// Writes the whole store to the file, replacing its content.
    pub fn save(&self) {
        if let Err(e) = self.write_file() {
            error!("could not save settings: {e}");
        }
    }

    // ── Convenience accessors ─────────────────────────────────────────────────

    /// The remembered last file, or `""` unless remembering is switched on.
    ///
    /// The stored (usually relative) form is returned; use
    /// [`SettingsStore::get_absolute_path`] to resolve it.
    pub fn get_last_file(&self) -> String {
        recent_file::last_file(self)
    }

    /// Stores `path` as the last file, converted to relative form.
    pub fn set_last_file(&mut self, path: impl AsRef<Path>) {
        let relative = paths::to_relative(path);
        recent_file::record_last_file(self, &relative.to_string_lossy());
    }

    /// Switches remembering the last file on or off.
    pub fn set_remember_file(&mut self, remember: bool) {
        recent_file::set_remember_file(self, remember);
    }

    /// Whether the last file is remembered.  Off unless the stored flag is `"True"`.
    pub fn remember_file(&self) -> bool {
        recent_file::remember_file(self)
    }

    /// Whether tooltips are shown.  A missing option counts as the default (on).
    pub fn tooltips_enabled(&self) -> bool {
        interface::tooltips_enabled(self)
    }

    /// Switches tooltips on or off.
    pub fn set_tooltips_enabled(&mut self, enabled: bool) {
        interface::set_tooltips_enabled(self, enabled);
    }

    /// Looks up a path-valued setting and resolves it to absolute form.
    ///
    /// Returns `None` when the option is missing or empty.  A default chosen
    /// by the caller (`.unwrap_or(..)`) is therefore never resolved.
    pub fn get_absolute_path(&self, section: &str, option: &str) -> Option<PathBuf> {
        self.store
            .get(section, option)
            .filter(|value| !value.is_empty())
            .map(|value| paths::to_absolute(value))
    }

    /// [`SettingsStore::get_absolute_path`] for the last-file setting.
    ///
    /// Unlike [`SettingsStore::get_last_file`] this ignores the remember flag.
    pub fn last_file_absolute(&self) -> Option<PathBuf> {
        self.get_absolute_path(SECTION_GENERAL, OPTION_LAST_FILE)
    }

    // ── File I/O ──────────────────────────────────────────────────────────────

    fn write_file(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&self.path, ini::serialize(&self.store)).map_err(|source| {
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl Default for SettingsStore {
    /// Opens [`DEFAULT_SETTINGS_FILE`] in the working directory.
    fn default() -> Self {
        Self::open(DEFAULT_SETTINGS_FILE)
    }
}

impl SettingsAccess for SettingsStore {
    fn get(&self, section: &str, option: &str) -> Option<String> {
        SettingsStore::get(self, section, option)
    }

    fn set(&mut self, section: &str, option: &str, value: &str) {
        SettingsStore::set(self, section, option, value);
    }
}

fn check_names(section: &str, option: &str) -> Result<(), NameError> {
    ini::check_section_name(section)?;
    ini::check_option_name(option)
}

/// Reads and parses the settings file at `path`.
fn load_file(path: &Path) -> Result<ConfigStore, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ini::parse(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
