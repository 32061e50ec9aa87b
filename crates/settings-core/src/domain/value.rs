//! Conversion of typed values to their stored string form.

use crate::domain::schema::flag_literal;

/// A value that can be written to a settings file.
///
/// Text is stored as-is and numbers use their `Display` form.  Booleans are
/// stored as the flag literals `"True"`/`"False"`, the only spelling that
/// flag reads such as [`is_true_literal`](crate::domain::schema::is_true_literal)
/// accept.
///
/// ```rust
/// use settings_core::SettingValue;
///
/// assert_eq!(true.to_setting(), "True");
/// assert_eq!(1.5f64.to_setting(), "1.5");
/// assert_eq!("text".to_setting(), "text");
/// ```
pub trait SettingValue {
    fn to_setting(&self) -> String;
}

impl SettingValue for str {
    fn to_setting(&self) -> String {
        self.to_string()
    }
}

impl SettingValue for String {
    fn to_setting(&self) -> String {
        self.clone()
    }
}

impl SettingValue for bool {
    fn to_setting(&self) -> String {
        flag_literal(*self).to_string()
    }
}

impl<T: SettingValue + ?Sized> SettingValue for &T {
    fn to_setting(&self) -> String {
        (**self).to_setting()
    }
}

macro_rules! display_setting {
    ($($ty:ty),*) => {
        $(
            impl SettingValue for $ty {
                fn to_setting(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_setting!(char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
