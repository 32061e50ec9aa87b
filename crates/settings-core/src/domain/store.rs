//! Ordered settings store with case-insensitive section and option lookup.
//!
//! A [`ConfigStore`] is an ordered list of [`Section`]s, and each section is
//! an ordered list of `(option, value)` pairs.  Names keep the casing they
//! were first written with, but every lookup and every write compares names
//! case-insensitively:
//!
//! ```rust
//! use settings_core::ConfigStore;
//!
//! let mut store = ConfigStore::new();
//! store.set("General", "Flag", "x");
//! store.set("GENERAL", "flag", "y");
//!
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.get("general", "FLAG"), Some("y"));
//! assert_eq!(store.sections().next().unwrap().name(), "General");
//! ```
//!
//! # Why a `Vec` and not a `HashMap`? (for beginners)
//!
//! A `HashMap` keyed by the lowercased name would lose the original casing,
//! and its iteration order is unspecified, so the file would be rewritten in
//! a different order on every save.  Settings files hold tens of entries, so
//! a linear scan costs nothing measurable and keeps the file stable.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::schema::DefaultSchema;

/// Returns `true` if `a` and `b` are equal once both are lowercased.
///
/// Uses full Unicode lowercasing without allocating.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// The canonical names a write actually landed on.
///
/// When a write matches an existing section or option case-insensitively,
/// these hold the stored casing rather than the casing passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub section: String,
    pub option: String,
}

/// A named group of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    options: Vec<(String, String)>,
}

impl Section {
    /// Creates an empty section named exactly `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// The section name, in the casing it was first written with.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn position(&self, option: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|(name, _)| eq_ignore_case(name, option))
    }

    /// Looks up `option` case-insensitively.
    pub fn get(&self, option: &str) -> Option<&str> {
        self.position(option)
            .map(|idx| self.options[idx].1.as_str())
    }

    /// Returns `true` if an option matching `option` case-insensitively exists.
    pub fn contains(&self, option: &str) -> bool {
        self.position(option).is_some()
    }

    /// Writes `value` under `option` and returns the stored option name.
    ///
    /// An existing option matching case-insensitively is overwritten in place
    /// and keeps its casing; otherwise a new option is appended using the
    /// casing of `option`.
    pub fn set(&mut self, option: &str, value: impl Into<String>) -> &str {
        let value = value.into();
        let idx = match self.position(option) {
            Some(idx) => {
                self.options[idx].1 = value;
                idx
            }
            None => {
                self.options.push((option.to_string(), value));
                self.options.len() - 1
            }
        };
        &self.options[idx].0
    }

    /// Removes `option` and returns its value, if it was present.
    pub fn remove(&mut self, option: &str) -> Option<String> {
        self.position(option)
            .map(|idx| self.options.remove(idx).1)
    }

    /// Iterates `(option, value)` pairs in insertion order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the section has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Ordered mapping of section name to [`Section`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: Vec<Section>,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated from `schema`.
    pub fn with_defaults(schema: &DefaultSchema) -> Self {
        let mut store = Self::new();
        schema.apply_to(&mut store);
        store
    }

    fn position(&self, section: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| eq_ignore_case(&s.name, section))
    }

    /// Looks up a section case-insensitively.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.position(name).map(|idx| &self.sections[idx])
    }

    /// Mutable variant of [`ConfigStore::section`].
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.position(name).map(move |idx| &mut self.sections[idx])
    }

    /// Returns the section matching `name`, appending a new one named
    /// exactly `name` if none matches.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }

    /// Returns the value of `section`/`option`, matching both case-insensitively.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.section(section)?.get(option)
    }

    /// Writes `value` under `section`/`option`.
    ///
    /// Missing sections and options are created with the casing passed in;
    /// existing ones keep their stored casing.  The returned [`ResolvedKey`]
    /// names what was actually written.
    pub fn set(&mut self, section: &str, option: &str, value: impl Into<String>) -> ResolvedKey {
        let section = self.ensure_section(section);
        let option = section.set(option, value).to_string();
        ResolvedKey {
            section: section.name().to_string(),
            option,
        }
    }

    /// Removes `section`/`option` and returns its value.
    ///
    /// The section itself is kept even when it becomes empty.
    pub fn remove(&mut self, section: &str, option: &str) -> Option<String> {
        self.section_mut(section)?.remove(option)
    }

    /// Returns `true` if a section matching `name` case-insensitively exists.
    pub fn has_section(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns `true` if `section`/`option` exists, matching both case-insensitively.
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.section(section).is_some_and(|s| s.contains(option))
    }

    /// Iterates sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the store has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

// Both levels serialize as maps so JSON output keeps the stored order.

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.options.len()))?;
        for (name, value) in &self.options {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for ConfigStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.name, section)?;
        }
        map.end()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
