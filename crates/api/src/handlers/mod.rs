//! HTTP handlers, grouped by resource.

pub mod assets;
pub mod auth;
pub mod catalog;
pub mod reports;
pub mod users;

use stockroom_core::error::CoreError;
use validator::Validate;

use crate::error::AppError;

/// Run validator-derive checks on a request DTO, mapping failures to a
/// 400 `VALIDATION_ERROR` naming the offending field.
pub(crate) fn validate_input<T: Validate>(input: &T) -> Result<(), AppError> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}
