//! Request field validation shared by the parameter models.
//!
//! Every failure is an `AppError::Unprocessable` naming the offending field.

use crate::server::error::AppError;

/// Trims `value` and requires the result to be non-empty.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Raw value from the request
///
/// # Returns
/// - `Ok(String)` - The trimmed value
/// - `Err(AppError::Unprocessable)` - Value is empty or whitespace only
pub fn required(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Unprocessable(format!("{} must not be empty", field)));
    }

    Ok(trimmed.to_string())
}

/// Trims `value` and requires its length, in characters, to be within `min..=max`.
pub fn length(field: &str, value: String, min: usize, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim().to_string();
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(AppError::Unprocessable(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }

    Ok(trimmed)
}

/// Minimal email shape check: one `@` with a non-empty local part and a dotted domain.
pub fn email(value: String) -> Result<String, AppError> {
    let trimmed = value.trim().to_string();
    let invalid = || AppError::Unprocessable("email must be a valid email address".to_string());

    if trimmed.chars().count() > 254 {
        return Err(invalid());
    }

    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    let domain_ok = !domain.contains('@')
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    if local.is_empty() || !domain_ok || trimmed.contains(char::is_whitespace) {
        return Err(invalid());
    }

    Ok(trimmed)
}

/// Requires a password of at least 6 characters. Passwords are not trimmed.
pub fn password(field: &str, value: String) -> Result<String, AppError> {
    if value.chars().count() < 6 {
        return Err(AppError::Unprocessable(format!(
            "{} must be at least 6 characters",
            field
        )));
    }

    Ok(value)
}

/// Requires `value` to lie within `min..=max`.
pub fn range<T: PartialOrd + std::fmt::Display>(
    field: &str,
    value: T,
    min: T,
    max: T,
) -> Result<T, AppError> {
    if value < min || value > max {
        return Err(AppError::Unprocessable(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }

    Ok(value)
}

/// Largest row offset a query may skip; databases store `OFFSET` as a signed 64-bit value.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Requires a row offset to fit the database's `OFFSET` range.
pub fn offset(field: &str, value: u64) -> Result<u64, AppError> {
    if value > MAX_OFFSET {
        return Err(AppError::Unprocessable(format!("{} is too large", field)));
    }

    Ok(value)
}

/// Requires `page * per_page` to be a valid row offset.
pub fn page(field: &str, page: u64, per_page: u64) -> Result<u64, AppError> {
    match page.checked_mul(per_page) {
        Some(skipped) if skipped <= MAX_OFFSET => Ok(page),
        _ => Err(AppError::Unprocessable(format!("{} is too large", field))),
    }
}
