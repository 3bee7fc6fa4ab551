//! Validation and state bookkeeping for the login form.
//!
//! This module contains the rule table and the touched/error tracking
//! used by the login page, extracted from the component to enable easier
//! testing.

use crate::models::auth::LoginRequest;

/// Minimum accepted length for both credential fields.
const MIN_CREDENTIAL_LEN: usize = 4;

/// A field of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

/// A single validation rule: a predicate plus the message key attached to
/// the field when the predicate fails.
#[derive(Debug)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message_key: &'static str,
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_long_enough(value: &str) -> bool {
    value.chars().count() >= MIN_CREDENTIAL_LEN
}

const USERNAME_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        message_key: "login.validation.required",
    },
    Rule {
        check: is_long_enough,
        message_key: "login.validation.min_username",
    },
];

const PASSWORD_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        message_key: "login.validation.required",
    },
    Rule {
        check: is_long_enough,
        message_key: "login.validation.min_password",
    },
];

/// Rules for a field, evaluated in order. The first failure wins.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::Username => USERNAME_RULES,
        Field::Password => PASSWORD_RULES,
    }
}

/// Run a field's rules against a value.
///
/// Returns the message key of the first failing rule, or `None` when the
/// value passes.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    rules_for(field)
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.message_key)
}

/// Current validation errors, one slot per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    /// Whether no field currently carries an error.
    pub fn is_clear(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Field values, touched flags, and validation errors for the login form.
///
/// An error is only *visible* for a field the user has interacted with,
/// so nothing is flagged before they had a chance to type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormState {
    username: String,
    password: String,
    username_touched: bool,
    password_touched: bool,
    errors: FieldErrors,
}

impl LoginFormState {
    /// Current value of the username field.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current value of the password field.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Update the username and revalidate it.
    pub fn set_username(&mut self, value: String) {
        self.errors.username = validate_field(Field::Username, &value);
        self.username = value;
    }

    /// Update the password and revalidate it.
    pub fn set_password(&mut self, value: String) {
        self.errors.password = validate_field(Field::Password, &value);
        self.password = value;
    }

    /// Mark the username field as touched.
    pub fn blur_username(&mut self) {
        self.username_touched = true;
    }

    /// Mark the password field as touched.
    pub fn blur_password(&mut self) {
        self.password_touched = true;
    }

    /// The error to show for a field, gated on the field being touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Username if self.username_touched => self.errors.username,
            Field::Password if self.password_touched => self.errors.password,
            _ => None,
        }
    }

    /// Revalidate everything and mark both fields touched.
    ///
    /// Returns the credentials to submit when the rule table passes;
    /// `None` blocks the submission.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        self.username_touched = true;
        self.password_touched = true;
        self.errors = FieldErrors {
            username: validate_field(Field::Username, &self.username),
            password: validate_field(Field::Password, &self.password),
        };
        self.errors.is_clear().then(|| LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}
