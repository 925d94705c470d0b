//! Client-side form validation.
//!
//! Validation runs before anything reaches the session store. Text fields are
//! trimmed; passwords are checked for presence but passed through verbatim.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use thiserror::Error;

use crate::net::types::SignUpFields;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Fields collected by the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn required(label: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(label));
    }
    Ok(trimmed.to_owned())
}

fn required_secret(label: &'static str, value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(label));
    }
    Ok(value.to_owned())
}

/// # Errors
///
/// `Required` for the first empty field.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), ValidationError> {
    Ok((required("Email", email)?, required_secret("Password", password)?))
}

/// # Errors
///
/// `Required` for the first empty field, then `PasswordMismatch`.
pub fn validate_sign_up(fields: &SignUpFields) -> Result<SignUpFields, ValidationError> {
    let name = required("Name", &fields.name)?;
    let email = required("Email", &fields.email)?;
    let password = required_secret("Password", &fields.password)?;
    let confirm_password = required_secret("Password confirmation", &fields.confirm_password)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(SignUpFields { name, email, password, confirm_password })
}

/// # Errors
///
/// `Required` when the address is empty.
pub fn validate_reset(email: &str) -> Result<String, ValidationError> {
    required("Email", email)
}

/// # Errors
///
/// `Required` for the first empty field.
pub fn validate_contact(fields: &ContactFields) -> Result<ContactFields, ValidationError> {
    Ok(ContactFields {
        name: required("Name", &fields.name)?,
        email: required("Email", &fields.email)?,
        subject: required("Subject", &fields.subject)?,
        message: required("Message", &fields.message)?,
    })
}
