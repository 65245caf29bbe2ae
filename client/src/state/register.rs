//! Registration form draft and local validation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::types::RegisterRequest;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Local validation failures. Never reach the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Transient form fields, discarded when the Register view unmounts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Check the draft and build the request payload.
    ///
    /// Mismatch is checked before length. Length counts UTF-16 code units,
    /// the same measure the browser's `String.length` uses.
    ///
    /// # Errors
    ///
    /// Returns a [`RegisterError`] when the passwords differ or are too short.
    pub fn validate(&self) -> Result<RegisterRequest, RegisterError> {
        if self.password != self.confirm_password {
            return Err(RegisterError::PasswordMismatch);
        }
        if self.password.encode_utf16().count() < MIN_PASSWORD_LEN {
            return Err(RegisterError::PasswordTooShort);
        }
        Ok(RegisterRequest {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            password: self.password.clone(),
        })
    }
}

/// One input of the register form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterField {
    Email,
    FirstName,
    LastName,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    /// Input `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Current value of this field in `form`.
    pub fn get(self, form: &RegisterForm) -> &str {
        match self {
            Self::Email => &form.email,
            Self::FirstName => &form.first_name,
            Self::LastName => &form.last_name,
            Self::Password => &form.password,
            Self::ConfirmPassword => &form.confirm_password,
        }
    }

    pub fn set(self, form: &mut RegisterForm, value: String) {
        let slot = match self {
            Self::Email => &mut form.email,
            Self::FirstName => &mut form.first_name,
            Self::LastName => &mut form.last_name,
            Self::Password => &mut form.password,
            Self::ConfirmPassword => &mut form.confirm_password,
        };
        *slot = value;
    }
}
