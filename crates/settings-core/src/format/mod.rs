//! Text encodings for [`crate::ConfigStore`].

pub mod ini;

pub use ini::{check_option_name, check_section_name, parse, serialize, IniError, NameError};
