//! The built-in default settings.
//!
//! The section and option names below are a fixed contract: existing
//! settings files on users' machines use exactly these identifiers, so they
//! are never translated or renamed.  Lookups are case-insensitive, so a file
//! that spells them `algemeen` or `ALGEMEEN` is still understood.

use crate::domain::store::ConfigStore;

/// General application settings.
pub const SECTION_GENERAL: &str = "Algemeen";
/// Path of the most recently opened file, stored relative to the working directory.
pub const OPTION_LAST_FILE: &str = "LaatsteBestand";
/// Whether [`OPTION_LAST_FILE`] should be reopened; holds [`TRUE_LITERAL`] or [`FALSE_LITERAL`].
pub const OPTION_REMEMBER_FILE: &str = "OnthoudBestand";

/// User-interface settings.
pub const SECTION_INTERFACE: &str = "Interface";
/// Whether tooltips are shown.
pub const OPTION_SHOW_TOOLTIPS: &str = "ToonTooltips";

/// String form of a `true` flag.
pub const TRUE_LITERAL: &str = "True";
/// String form of a `false` flag.
pub const FALSE_LITERAL: &str = "False";

/// Converts a boolean to the flag literal stored in the settings file.
pub fn flag_literal(value: bool) -> &'static str {
    if value {
        TRUE_LITERAL
    } else {
        FALSE_LITERAL
    }
}

/// Interprets a stored flag.  Only the exact literal `"True"` counts as set.
pub fn is_true_literal(value: &str) -> bool {
    value == TRUE_LITERAL
}

/// One default `section.option = value` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub section: &'static str,
    pub option: &'static str,
    pub default: &'static str,
}

/// A fixed, ordered list of default settings.
///
/// Used only to bootstrap a store when no valid settings file exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultSchema {
    entries: &'static [SchemaEntry],
}

/// The application's default settings, in file order.
pub const APP_DEFAULTS: DefaultSchema = DefaultSchema::new(&[
    SchemaEntry {
        section: SECTION_GENERAL,
        option: OPTION_LAST_FILE,
        default: "",
    },
    SchemaEntry {
        section: SECTION_GENERAL,
        option: OPTION_REMEMBER_FILE,
        default: FALSE_LITERAL,
    },
    SchemaEntry {
        section: SECTION_INTERFACE,
        option: OPTION_SHOW_TOOLTIPS,
        default: TRUE_LITERAL,
    },
]);

impl DefaultSchema {
    pub const fn new(entries: &'static [SchemaEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [SchemaEntry] {
        self.entries
    }

    /// Writes every entry into `store`.
    ///
    /// Sections and options are matched case-insensitively, so each one
    /// exists exactly once afterwards.
    pub fn apply_to(&self, store: &mut ConfigStore) {
        for entry in self.entries {
            store.set(entry.section, entry.option, entry.default);
        }
    }

    /// Returns the default for `section`/`option`, if the schema defines one.
    pub fn default_for(&self, section: &str, option: &str) -> Option<&'static str> {
        use crate::domain::store::eq_ignore_case;

        self.entries
            .iter()
            .find(|e| eq_ignore_case(e.section, section) && eq_ignore_case(e.option, option))
            .map(|e| e.default)
    }
}

impl Default for DefaultSchema {
    fn default() -> Self {
        APP_DEFAULTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_defaults_produce_two_sections_in_order() {
        // Arrange / Act
        let store = ConfigStore::with_defaults(&APP_DEFAULTS);

        // Assert
        let names: Vec<&str> = store.sections().map(|s| s.name()).collect();
        assert_eq!(names, vec![SECTION_GENERAL, SECTION_INTERFACE]);
    }

    #[test]
    fn test_app_defaults_values() {
        let store = ConfigStore::with_defaults(&APP_DEFAULTS);

        assert_eq!(store.get(SECTION_GENERAL, OPTION_LAST_FILE), Some(""));
        assert_eq!(store.get(SECTION_GENERAL, OPTION_REMEMBER_FILE), Some("False"));
        assert_eq!(store.get(SECTION_INTERFACE, OPTION_SHOW_TOOLTIPS), Some("True"));
    }

    #[test]
    fn test_apply_twice_creates_each_option_once() {
        // Arrange
        let mut store = ConfigStore::new();

        // Act
        APP_DEFAULTS.apply_to(&mut store);
        APP_DEFAULTS.apply_to(&mut store);

        // Assert
        assert_eq!(store.len(), 2);
        assert_eq!(store.section(SECTION_GENERAL).map(|s| s.len()), Some(2));
        assert_eq!(store.section(SECTION_INTERFACE).map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_apply_reuses_existing_section_casing() {
        let mut store = ConfigStore::new();
        store.set("algemeen", "Other", "1");

        APP_DEFAULTS.apply_to(&mut store);

        assert!(store.sections().any(|s| s.name() == "algemeen"));
        assert!(!store.sections().any(|s| s.name() == SECTION_GENERAL));
    }

    #[test]
    fn test_default_for_is_case_insensitive() {
        assert_eq!(APP_DEFAULTS.default_for("INTERFACE", "toontooltips"), Some("True"));
        assert_eq!(APP_DEFAULTS.default_for("Interface", "Missing"), None);
    }

    #[test]
    fn test_flag_literals() {
        assert_eq!(flag_literal(true), "True");
        assert_eq!(flag_literal(false), "False");
        assert!(is_true_literal("True"));
        assert!(!is_true_literal("true"), "only the exact literal counts");
        assert!(!is_true_literal(""));
    }
}
