use crate::error::ValidationError;

pub const VALUE_MIN_LEN: usize = 1;
pub const VALUE_MAX_LEN: usize = 50;

/// Checks the text of a todo. Length is counted in characters, not bytes.
pub fn validate_value(value: Option<&str>) -> Result<&str, ValidationError> {
    let value = value.ok_or(ValidationError::Required { field: "value" })?;
    let len = value.chars().count();
    if len < VALUE_MIN_LEN {
        return Err(ValidationError::TooShort {
            field: "value",
            min: VALUE_MIN_LEN,
        });
    }
    if len > VALUE_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "value",
            max: VALUE_MAX_LEN,
        });
    }
    Ok(value)
}
