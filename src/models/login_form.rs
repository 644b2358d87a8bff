use crate::api::{LoginOutcome, LoginRequest};

/// Local state of the login view.
///
/// Credentials live only here and are dropped with the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
    /// Empty when there is nothing to show
    error: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    /// Request body built from the current field values.
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Fold a server answer into the form.
    pub fn apply_outcome(&mut self, outcome: &LoginOutcome) {
        match outcome {
            LoginOutcome::Accepted(_) => self.clear_error(),
            LoginOutcome::Rejected { message, .. } => self.set_error(message.as_str()),
        }
    }
}
