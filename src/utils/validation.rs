use crate::utils::error::{PrimeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PrimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PrimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PrimeError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// 數量小於 1 時不報錯，只記錄警告（會產生空陣列）
pub fn warn_on_non_positive_count(count: i64) {
    if count < 1 {
        tracing::warn!(
            "⚠️ Count {} is not positive; an empty array will be written",
            count
        );
    }
}
