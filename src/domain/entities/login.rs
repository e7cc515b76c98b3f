//! Login request and response entities.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::LoginError;

/// Credentials captured from the login form at call time.
///
/// Serializes to exactly `{"username": ..., "password": ...}`. The password is
/// redacted from `Debug` output.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

fn expose_password<S>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(password.expose_secret())
}

/// Explicit verdict sent by portals that implement the discriminated contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    Error,
}

impl ResponseStatus {
    /// Recognizes exactly `"ok"` and `"error"`; any other `status` is not a verdict.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value.as_str()? {
            "ok" => Some(Self::Ok),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Body returned by the login endpoint.
///
/// Every field is optional and kept as raw JSON: legacy portals signal success
/// through a truthy `id` alone, newer ones add `status`. Field types are not
/// enforced, so a numeric `name` or an unrelated `status` never spoils the reply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub role: Option<Value>,
}

impl LoginResponse {
    /// Parses a raw response body.
    ///
    /// # Errors
    ///
    /// - [`LoginError::Decode`] if the body is not JSON
    /// - [`LoginError::UnexpectedBody`] if the body is JSON but not an object
    pub fn from_slice(body: &[u8]) -> Result<Self, LoginError> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(LoginError::UnexpectedBody(json_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The explicit verdict, if the portal sent one.
    pub fn status(&self) -> Option<ResponseStatus> {
        self.status.as_ref().and_then(ResponseStatus::from_value)
    }

    /// Display name, rendered as text.
    pub fn name(&self) -> Option<String> {
        self.name.as_ref().and_then(display_text)
    }

    /// Rejection message, rendered as text.
    pub fn message(&self) -> Option<String> {
        self.message.as_ref().and_then(display_text)
    }

    /// Role of the user. Only string roles count.
    pub fn role(&self) -> Option<&str> {
        self.role.as_ref().and_then(Value::as_str)
    }

    /// Decides whether the portal accepted the credentials.
    ///
    /// A `status` of exactly `"ok"` or `"error"` wins. Otherwise the response is
    /// accepted only when `id` is present and truthy, so `{"id": 0}` is a rejection.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Protocol`] for `status: "ok"` without a usable `id`.
    pub fn into_outcome(self) -> Result<LoginOutcome, LoginError> {
        let accepted = match (self.status(), &self.id) {
            (Some(ResponseStatus::Ok), Some(id)) if !id.is_null() => true,
            (Some(ResponseStatus::Ok), _) => {
                return Err(LoginError::Protocol(
                    "status \"ok\" without an id".to_string(),
                ));
            }
            (Some(ResponseStatus::Error), _) => false,
            (None, Some(id)) => is_truthy(id),
            (None, None) => false,
        };

        match self.id.as_ref() {
            Some(id) if accepted => Ok(LoginOutcome::Accepted {
                id: UserId::from_value(id),
                name: self.name(),
                role: self.role().map(str::to_string),
            }),
            _ => Ok(LoginOutcome::Rejected {
                message: self.message(),
            }),
        }
    }
}

/// The portal's verdict on a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted {
        id: UserId,
        name: Option<String>,
        role: Option<String>,
    },
    Rejected {
        message: Option<String>,
    },
}

/// Identifier of an authenticated caseworker, in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self(s.clone()),
            other => Self(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JavaScript truthiness over JSON values.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text shown for a JSON value: strings as-is, `null` as nothing, the rest as JSON.
fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
