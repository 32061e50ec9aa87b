//! User-interface preferences.

use settings_core::domain::schema::{
    flag_literal, is_true_literal, APP_DEFAULTS, OPTION_SHOW_TOOLTIPS, SECTION_INTERFACE,
};

use super::SettingsAccess;

/// Returns whether tooltips are shown.
///
/// A missing option falls back to the built-in default.
pub fn tooltips_enabled<S: SettingsAccess + ?Sized>(settings: &S) -> bool {
    settings
        .get(SECTION_INTERFACE, OPTION_SHOW_TOOLTIPS)
        .or_else(|| {
            APP_DEFAULTS
                .default_for(SECTION_INTERFACE, OPTION_SHOW_TOOLTIPS)
                .map(str::to_string)
        })
        .is_some_and(|v| is_true_literal(&v))
}

/// Stores the tooltip flag as `"True"` or `"False"`.
pub fn set_tooltips_enabled<S: SettingsAccess + ?Sized>(settings: &mut S, enabled: bool) {
    settings.set(SECTION_INTERFACE, OPTION_SHOW_TOOLTIPS, flag_literal(enabled));
}
