//! Form validation
//!
//! Each field has a small predicate returning the message to show when it
//! fails. `validate_register` and `validate_login` run the predicates over a
//! candidate form and collect at most one message per field.

use std::sync::LazyLock;

use regex::Regex;

use crate::shared::auth::{LoginPayload, RegisterPayload, Role};
use crate::shared::error::{FieldError, ValidationErrors};

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// The HTML living standard's "valid email address" grammar
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    ))
    .expect("email pattern compiles")
});

/// Registration form input as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Raw role selection; `None` when nothing was picked
    pub role: Option<String>,
}

impl RegisterForm {
    /// Validate and build the request body.
    ///
    /// An absent role registers a [`Role::User`].
    pub fn to_payload(&self) -> Result<RegisterPayload, ValidationErrors> {
        validate_register(self)?;
        let role = match self.role.as_deref() {
            Some(raw) => raw.parse::<Role>().unwrap_or_default(),
            None => Role::default(),
        };
        Ok(RegisterPayload {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role,
        })
    }
}

/// Login form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_payload(&self) -> Result<LoginPayload, ValidationErrors> {
        validate_login(self)?;
        Ok(LoginPayload {
            identifier: self.identifier.clone(),
            password: self.password.clone(),
        })
    }
}

/// Usernames are free-form
pub fn check_username(_username: &str) -> Result<(), String> {
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

pub fn check_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Roles are optional, but a given role must be a known one
pub fn check_role(role: Option<&str>) -> Result<(), String> {
    match role {
        None => Ok(()),
        Some(raw) if raw.parse::<Role>().is_ok() => Ok(()),
        Some(_) => {
            let allowed: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
            Err(format!("Role must be one of: {}", allowed.join(", ")))
        }
    }
}

fn collect(errors: &mut ValidationErrors, field: &'static str, result: Result<(), String>) {
    if let Err(message) = result {
        errors.push(FieldError::new(field, message));
    }
}

pub fn validate_register(form: &RegisterForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    collect(&mut errors, "username", check_username(&form.username));
    collect(&mut errors, "email", check_email(&form.email));
    collect(&mut errors, "password", check_password(&form.password));
    collect(&mut errors, "role", check_role(form.role.as_deref()));
    errors.into_result()
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if form.identifier.trim().is_empty() {
        errors.push(FieldError::new("identifier", "Identifier is required"));
    }
    if form.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    errors.into_result()
}
