//! Dashboard users.

use std::fmt;

use reservista_core::Fields;
use serde::{Deserialize, Serialize};

use super::patch_field;
use crate::validation::{Checker, Validate, ValidationErrors};

/// Access level of a dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access
    Admin,
    /// Day-to-day operations
    #[default]
    Staff,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Staff => f.write_str("staff"),
        }
    }
}

/// A dashboard account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name
    pub name: String,
    /// Login e-mail
    pub email: String,
    /// Access level
    pub role: Role,
    /// Only accepted on create/update, never rendered or searched
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl User {
    /// Creates a user without a password.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            password: None,
        }
    }
}

/// Partial user update. An empty password keeps the current one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub password: Option<String>,
}

impl Fields for User {
    type Patch = UserUpdate;

    fn merge(&mut self, patch: UserUpdate) {
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.email, patch.email);
        patch_field(&mut self.role, patch.role);
        if let Some(password) = patch.password.filter(|p| !p.is_empty()) {
            self.password = Some(password);
        }
    }
}

const NAME_MESSAGE: &str = "Name must be at least 2 characters.";
const EMAIL_MESSAGE: &str = "Invalid email address.";
const PASSWORD_MESSAGE: &str = "Password must be at least 6 characters.";

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .min_chars("name", &self.name, 2, NAME_MESSAGE)
            .email("email", &self.email, EMAIL_MESSAGE)
            .min_chars_opt("password", self.password.as_deref(), 6, PASSWORD_MESSAGE)
            .finish()
    }
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::new();
        checker
            .min_chars_opt("name", self.name.as_deref(), 2, NAME_MESSAGE)
            .min_chars_or_empty("password", self.password.as_deref(), 6, PASSWORD_MESSAGE);
        if let Some(email) = &self.email {
            checker.email("email", email, EMAIL_MESSAGE);
        }
        checker.finish()
    }
}
