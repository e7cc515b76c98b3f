//! Terminal-backed login form.

use super::run_blocking;
use crate::domain::ports::{FormSource, PASSWORD_FIELD, USERNAME_FIELD};
use crate::error::LoginError;
use dialoguer::{Input, Password};

/// Login form filled in on the terminal.
///
/// Preset values (from command-line flags) are returned as-is; missing ones are
/// prompted for each time the field is read.
#[derive(Debug, Default, Clone)]
pub struct PromptForm {
    username: Option<String>,
    password: Option<String>,
}

impl PromptForm {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }
}

impl FormSource for PromptForm {
    fn field_value(&self, field_id: &'static str) -> Result<String, LoginError> {
        match field_id {
            USERNAME_FIELD => match &self.username {
                Some(username) => Ok(username.clone()),
                None => run_blocking(|| {
                    Input::<String>::new()
                        .with_prompt("Username")
                        .interact_text()
                })
                .map_err(|e| LoginError::form(USERNAME_FIELD, e.to_string())),
            },
            PASSWORD_FIELD => match &self.password {
                Some(password) => Ok(password.clone()),
                None => run_blocking(|| Password::new().with_prompt("Password").interact())
                    .map_err(|e| LoginError::form(PASSWORD_FIELD, e.to_string())),
            },
            other => Err(LoginError::form(other, "no such field on the login form")),
        }
    }
}
