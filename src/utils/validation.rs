use crate::errors::AppError;
use validator::{Validate, ValidationErrors};

/// Flattens validation errors into `field: message` pairs.
pub fn describe(err: &ValidationErrors) -> String {
    let mut details = err
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| e.message.as_deref().unwrap_or(&*e.code).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", field, messages)
        })
        .collect::<Vec<_>>();
    details.sort();
    details.join("; ")
}

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|err| AppError::ValidationMissing(describe(&err)))
}
