//! INI text codec for [`ConfigStore`].
//!
//! Format:
//! ```text
//! ; comment
//! [Section]
//! key = value
//! other: value
//! multi = first line
//!     continued line
//! ```
//!
//! - `=` and `:` are both accepted as the delimiter; the first one wins.
//! - Keys and values are trimmed.  Leading and trailing whitespace of a value
//!   therefore does not survive a save/load cycle.
//! - Comments are full-line only (`#` or `;`).
//! - Section and option names are unique case-insensitively; a repeated
//!   header or key is a parse error.
//! - Not every string can be written as a name and read back unchanged.
//!   [`check_section_name`] and [`check_option_name`] reject those that
//!   cannot.
//!
//! [`serialize`] always writes `key = value` with sections separated by one
//! blank line, so the same store always produces the same bytes.

use thiserror::Error;

use crate::domain::store::ConfigStore;

/// Errors produced while parsing INI text.  Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IniError {
    /// An option appeared before any `[Section]` header.
    #[error("line {line}: option outside of any section")]
    MissingSectionHeader { line: usize },

    /// A line started with `[` but did not end with `]`.
    #[error("line {line}: unterminated section header")]
    UnterminatedSectionHeader { line: usize },

    /// A `[ ]` header with a blank name.
    #[error("line {line}: empty section name")]
    EmptySectionName { line: usize },

    /// A section header repeated (compared case-insensitively).
    #[error("line {line}: duplicate section [{name}]")]
    DuplicateSection { line: usize, name: String },

    /// An option repeated within one section (compared case-insensitively).
    #[error("line {line}: duplicate option {option:?} in section [{section}]")]
    DuplicateOption {
        line: usize,
        section: String,
        option: String,
    },

    /// An option line without `=` or `:`.
    #[error("line {line}: expected `key = value`")]
    MissingDelimiter { line: usize },

    /// An option line whose key is blank.
    #[error("line {line}: empty option name")]
    EmptyOptionName { line: usize },
}

impl IniError {
    /// The 1-based line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingSectionHeader { line }
            | Self::UnterminatedSectionHeader { line }
            | Self::EmptySectionName { line }
            | Self::DuplicateSection { line, .. }
            | Self::DuplicateOption { line, .. }
            | Self::MissingDelimiter { line }
            | Self::EmptyOptionName { line } => *line,
        }
    }
}

/// Why a name cannot be written to an INI file and read back unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    /// Names are trimmed on load.
    #[error("name {0:?} has leading or trailing whitespace")]
    Untrimmed(String),

    #[error("name {0:?} contains a line break")]
    LineBreak(String),

    /// `=` or `:` would end an option name early.
    #[error("option name {0:?} contains a delimiter")]
    Delimiter(String),

    /// `[`, `#` or `;` at the start of a line mean a header or a comment.
    #[error("option name {0:?} starts with {1:?}")]
    LeadingMarker(String, char),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parses INI text into a [`ConfigStore`].
///
/// # Errors
///
/// Returns the first [`IniError`] encountered; nothing is returned for a
/// partially valid file.
///
/// # Examples
///
/// ```rust
/// use settings_core::format::ini;
///
/// let store = ini::parse("[General]\nName = value\n").unwrap();
/// assert_eq!(store.get("general", "name"), Some("value"));
/// ```
pub fn parse(text: &str) -> Result<ConfigStore, IniError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut store = ConfigStore::new();
    let mut current: Option<String> = None;
    // Option that an indented line would continue, and the blank lines seen
    // since its last line.
    let mut open_option: Option<String> = None;
    let mut pending_blank = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            if open_option.is_some() {
                pending_blank += 1;
            }
            continue;
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if raw.starts_with(char::is_whitespace) {
            if let (Some(section), Some(option)) = (current.as_deref(), open_option.as_deref()) {
                append_continuation(&mut store, section, option, pending_blank, trimmed);
                pending_blank = 0;
                continue;
            }
        }
        pending_blank = 0;

        if let Some(header) = trimmed.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(IniError::UnterminatedSectionHeader { line })?
                .trim();
            if name.is_empty() {
                return Err(IniError::EmptySectionName { line });
            }
            if store.has_section(name) {
                return Err(IniError::DuplicateSection {
                    line,
                    name: name.to_string(),
                });
            }
            store.ensure_section(name);
            current = Some(name.to_string());
            open_option = None;
            continue;
        }

        let section = current
            .as_deref()
            .ok_or(IniError::MissingSectionHeader { line })?;
        let (key, value) = split_option(trimmed).ok_or(IniError::MissingDelimiter { line })?;
        if key.is_empty() {
            return Err(IniError::EmptyOptionName { line });
        }
        if store.has_option(section, key) {
            return Err(IniError::DuplicateOption {
                line,
                section: section.to_string(),
                option: key.to_string(),
            });
        }
        store.set(section, key, value);
        open_option = Some(key.to_string());
    }

    Ok(store)
}

/// Serializes `store` to INI text.
///
/// Output is deterministic: sections and options in insertion order, one
/// blank line between sections, a trailing newline after the last option.
/// Empty values are written as `key =`; embedded newlines become tab-indented
/// continuation lines.
pub fn serialize(store: &ConfigStore) -> String {
    let mut out = String::new();
    for (idx, section) in store.sections().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(section.name());
        out.push_str("]\n");
        for (key, value) in section.options() {
            write_option(&mut out, key, value);
        }
    }
    out
}

/// Checks that `name` survives [`serialize`] then [`parse`] as a section name.
pub fn check_section_name(name: &str) -> Result<(), NameError> {
    check_common(name)
}

/// Checks that `name` survives [`serialize`] then [`parse`] as an option name.
///
/// # Examples
///
/// ```rust
/// use settings_core::format::ini::{check_option_name, NameError};
///
/// assert!(check_option_name("Width").is_ok());
/// assert_eq!(
///     check_option_name("C:"),
///     Err(NameError::Delimiter("C:".to_string()))
/// );
/// ```
pub fn check_option_name(name: &str) -> Result<(), NameError> {
    check_common(name)?;
    if name.contains(|c: char| c == '=' || c == ':') {
        return Err(NameError::Delimiter(name.to_string()));
    }
    match name.chars().next() {
        Some(marker @ ('[' | '#' | ';')) => Err(NameError::LeadingMarker(name.to_string(), marker)),
        _ => Ok(()),
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_common(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.contains(|c: char| c == '\n' || c == '\r') {
        return Err(NameError::LineBreak(name.to_string()));
    }
    if name.trim() != name {
        return Err(NameError::Untrimmed(name.to_string()));
    }
    Ok(())
}

fn split_option(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(|c: char| c == '=' || c == ':')?;
    Some((line[..pos].trim(), line[pos + 1..].trim()))
}

fn append_continuation(
    store: &mut ConfigStore,
    section: &str,
    option: &str,
    blank_lines: usize,
    text: &str,
) {
    if let Some(section) = store.section_mut(section) {
        let mut value = section.get(option).unwrap_or_default().to_string();
        for _ in 0..blank_lines {
            value.push('\n');
        }
        value.push('\n');
        value.push_str(text);
        section.set(option, value);
    }
}

fn write_option(out: &mut String, key: &str, value: &str) {
    let encoded = value.replace('\n', "\n\t");
    out.push_str(key);
    if encoded.is_empty() || encoded.starts_with('\n') {
        out.push_str(" =");
    } else {
        out.push_str(" = ");
    }
    out.push_str(&encoded);
    out.push('\n');
}

// ── Tests ─────────────────────────────────────────────────────────────────────
