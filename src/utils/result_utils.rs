use crate::utils::error_utils::LookupError;
use crate::utils::log_utils::fatal;

pub trait FatalValueMapper<T> {
    /// `Some` on success, `None` for a missing key when `disable_panic` is set,
    /// otherwise a fatal abort carrying the error's diagnostic.
    fn map_value_or_panic(self, disable_panic: bool) -> Option<T>;
}

impl<T> FatalValueMapper<T> for Result<T, LookupError> {
    fn map_value_or_panic(self, disable_panic: bool) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) if disable_panic && e.is_key_not_found() => None,
            Err(e) => fatal(e.diagnostic()),
        }
    }
}
