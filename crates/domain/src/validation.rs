// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates a user's name and email.
///
/// This function checks field shape only.
/// It does NOT check for uniqueness (that requires the store).
///
/// # Arguments
///
/// * `name` - The display name
/// * `email` - The email address
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank
/// - The email is blank, lacks a single `@`, or has an empty local or
///   domain part
pub fn validate_user_fields(name: &str, email: &str) -> Result<(), DomainError> {
    // Rule: name must not be blank
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    validate_email(email)
}

/// Validates the shape of an email address.
///
/// # Errors
///
/// Returns an error if the address is not `local@domain` with both parts
/// non-empty and no whitespace.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let trimmed: &str = email.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot be empty",
        )));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidEmail(format!(
            "'{trimmed}' contains whitespace"
        )));
    }
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(DomainError::InvalidEmail(format!(
            "'{trimmed}' is not of the form local@domain"
        ))),
    }
}

/// Validates a building's required fields.
///
/// # Errors
///
/// Returns an error if the name is blank.
pub fn validate_building_fields(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Building name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a room's fields.
///
/// # Arguments
///
/// * `name` - The room name
/// * `capacity` - Optional seat count
/// * `color` - Optional display color
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank
/// - The capacity is present and not positive
/// - The color is present and not `#RRGGBB`
pub fn validate_room_fields(
    name: &str,
    capacity: Option<i32>,
    color: Option<&str>,
) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Room name cannot be empty",
        )));
    }

    if let Some(capacity) = capacity
        && capacity <= 0
    {
        return Err(DomainError::InvalidCapacity { capacity });
    }

    if let Some(color) = color {
        validate_color(color)?;
    }

    Ok(())
}

/// Validates a `#RRGGBB` display color.
///
/// # Errors
///
/// Returns an error if the value is not a `#` followed by six hex digits.
pub fn validate_color(color: &str) -> Result<(), DomainError> {
    let valid: bool = color.len() == 7
        && color.starts_with('#')
        && color[1..].bytes().all(|b| b.is_ascii_hexdigit());
    if !valid {
        return Err(DomainError::InvalidColor(color.to_string()));
    }
    Ok(())
}
