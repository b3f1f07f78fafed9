use crate::error::{PracticeError, PracticeResult};

/// Trimmed value of a required text field
pub(crate) fn required(field: &str, value: Option<String>) -> PracticeResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PracticeError::invalid_input(format!("{} is required", field))),
    }
}

/// Optional text field, blank collapses to None
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn one_of(field: &str, value: u32, allowed: &[u32]) -> PracticeResult<u32> {
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(PracticeError::invalid_input(format!(
            "{} must be one of {:?}",
            field, allowed
        )))
    }
}

pub(crate) fn within(field: &str, value: u32, min: u32, max: u32) -> PracticeResult<u32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PracticeError::invalid_input(format!(
            "{} must be between {} and {}",
            field, min, max
        )))
    }
}
