//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_object::ValueObject;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A translatable, human-readable message.
///
/// The text is kept as a raw template with `%name` / `%1` placeholders and the
/// arguments stored alongside it. `Display` renders the placeholders;
/// [`Phrase::raw`] hands back the template untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    text: String,
    args: Vec<(String, String)>,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            args: Vec::new(),
        }
    }

    /// Bind a placeholder (`%key`) to a value.
    pub fn arg(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.args.push((key.into(), value.to_string()));
        self
    }

    pub fn raw(&self) -> &str {
        &self.text
    }

    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    pub fn render(&self) -> String {
        // Longest keys first so `%10` is not eaten by `%1`.
        let mut args: Vec<&(String, String)> = self.args.iter().collect();
        args.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        args.into_iter().fold(self.text.clone(), |acc, (key, value)| {
            acc.replace(&format!("%{key}"), value)
        })
    }
}

impl ValueObject for Phrase {}

impl core::fmt::Display for Phrase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Domain-level error raised by the storefront services.
///
/// Every variant except [`DomainError::Internal`] is *localized*: it carries a
/// [`Phrase`] that is safe to show to a caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("{0}")]
    Validation(Phrase),

    /// A requested resource was not found.
    #[error("{0}")]
    NotFound(Phrase),

    /// A conflict occurred (e.g. duplicate email, inactive cart).
    #[error("{0}")]
    Conflict(Phrase),

    /// Any other user-facing failure raised by a service.
    #[error("{0}")]
    Localized(Phrase),

    /// Unclassified failure; the message is not meant for end users.
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(Phrase::new(msg))
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(Phrase::new(msg))
    }

    pub fn localized(phrase: Phrase) -> Self {
        Self::Localized(phrase)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Entity lookup failure: `No such entity with <field> = <value>`.
    pub fn no_such_entity(field: &str, value: impl ToString) -> Self {
        Self::NotFound(
            Phrase::new("No such entity with %fieldName = %fieldValue")
                .arg("fieldName", field)
                .arg("fieldValue", value),
        )
    }

    pub fn not_found(phrase: Phrase) -> Self {
        Self::NotFound(phrase)
    }

    /// The phrase of a localized error, `None` for [`DomainError::Internal`].
    pub fn phrase(&self) -> Option<&Phrase> {
        match self {
            Self::Validation(p) | Self::NotFound(p) | Self::Conflict(p) | Self::Localized(p) => {
                Some(p)
            }
            Self::Internal(_) => None,
        }
    }

    pub fn is_localized(&self) -> bool {
        self.phrase().is_some()
    }
}
