//! "Reopen last file" behaviour.
//!
//! Two settings cooperate: `Algemeen.LaatsteBestand` holds the path and
//! `Algemeen.OnthoudBestand` says whether it should be used at all.  The
//! path is only handed out while the flag is the literal `"True"`.

use settings_core::domain::schema::{
    flag_literal, is_true_literal, OPTION_LAST_FILE, OPTION_REMEMBER_FILE, SECTION_GENERAL,
};

use super::SettingsAccess;

/// Returns `true` if the last file should be remembered.
pub fn remember_file<S: SettingsAccess + ?Sized>(settings: &S) -> bool {
    settings
        .get(SECTION_GENERAL, OPTION_REMEMBER_FILE)
        .is_some_and(|v| is_true_literal(&v))
}

/// Returns the stored last file, or `""` when remembering is off or no
/// file is stored.  The value is returned as stored (not resolved).
pub fn last_file<S: SettingsAccess + ?Sized>(settings: &S) -> String {
    if !remember_file(settings) {
        return String::new();
    }
    settings
        .get(SECTION_GENERAL, OPTION_LAST_FILE)
        .unwrap_or_default()
}

/// Stores `path` as the last file.  Callers pass the portable (relative) form.
pub fn record_last_file<S: SettingsAccess + ?Sized>(settings: &mut S, path: &str) {
    settings.set(SECTION_GENERAL, OPTION_LAST_FILE, path);
}

/// Turns remembering the last file on or off.
pub fn set_remember_file<S: SettingsAccess + ?Sized>(settings: &mut S, remember: bool) {
    settings.set(SECTION_GENERAL, OPTION_REMEMBER_FILE, flag_literal(remember));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::MockSettingsAccess;

    fn settings_with(remember: Option<&'static str>, last: Option<&'static str>) -> MockSettingsAccess {
        let mut mock = MockSettingsAccess::new();
        mock.expect_get()
            .withf(|section, option| section == SECTION_GENERAL && option == OPTION_REMEMBER_FILE)
            .returning(move |_, _| remember.map(str::to_string));
        mock.expect_get()
            .withf(|section, option| section == SECTION_GENERAL && option == OPTION_LAST_FILE)
            .returning(move |_, _| last.map(str::to_string));
        mock
    }

    #[test]
    fn test_last_file_returned_when_remember_is_true() {
        // Arrange
        let settings = settings_with(Some("True"), Some("data/report.xlsx"));

        // Act
        let last = last_file(&settings);

        // Assert
        assert_eq!(last, "data/report.xlsx");
    }

    #[test]
    fn test_last_file_empty_when_remember_is_false() {
        let settings = settings_with(Some("False"), Some("data/report.xlsx"));
        assert_eq!(last_file(&settings), "");
    }

    #[test]
    fn test_last_file_empty_when_remember_is_absent() {
        let settings = settings_with(None, Some("data/report.xlsx"));
        assert_eq!(last_file(&settings), "");
    }

    #[test]
    fn test_last_file_requires_exact_true_literal() {
        let settings = settings_with(Some("true"), Some("data/report.xlsx"));
        assert_eq!(last_file(&settings), "");
    }

    #[test]
    fn test_last_file_empty_when_path_absent() {
        let settings = settings_with(Some("True"), None);
        assert_eq!(last_file(&settings), "");
    }

    #[test]
    fn test_set_remember_file_writes_flag_literal() {
        // Arrange
        let mut settings = MockSettingsAccess::new();
        settings
            .expect_set()
            .withf(|section, option, value| {
                section == SECTION_GENERAL && option == OPTION_REMEMBER_FILE && value == "False"
            })
            .times(1)
            .return_const(());

        // Act / Assert (expectation verified on drop)
        set_remember_file(&mut settings, false);
    }

    #[test]
    fn test_record_last_file_writes_path_verbatim() {
        let mut settings = MockSettingsAccess::new();
        settings
            .expect_set()
            .withf(|section, option, value| {
                section == SECTION_GENERAL && option == OPTION_LAST_FILE && value == "../x.xlsx"
            })
            .times(1)
            .return_const(());

        record_last_file(&mut settings, "../x.xlsx");
    }
}
