// crates/shared-kernel/src/error.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_objects::ArgumentName;

/// Root error type returned by every guard.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GuardError {
    /// Adds caller context while preserving the rejected guard as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<GuardError>,
    },

    #[error("{} must be {requirement}, but was {actual}", describe(.name))]
    InvalidArgument {
        name: Option<String>,
        actual: String,
        requirement: String,
    },

    #[error("{} must be assignable to `{expected_type}`, but has type `{actual_type}`", describe(.name))]
    TypeMismatch {
        name: Option<String>,
        actual_type: String,
        expected_type: String,
    },

    #[error("{}: {subject} is null", describe(.name))]
    NullReference {
        name: Option<String>,
        subject: NullSubject,
    },
}

pub type GuardResult<T> = std::result::Result<T, GuardError>;

fn describe(name: &Option<String>) -> String {
    match name {
        Some(label) => format!("Argument '{label}'"),
        None => "Argument".to_string(),
    }
}

/// The two failure channels a guard can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value was present but violated the predicate (including type mismatches).
    InvalidArgument,
    /// A value, collection, element or type descriptor was absent.
    NullReference,
}

/// What exactly was absent when a [`GuardError::NullReference`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullSubject {
    Value,
    Collection,
    Element { index: usize },
    Type,
}

impl fmt::Display for NullSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("value"),
            Self::Collection => f.write_str("collection"),
            Self::Element { index } => write!(f, "element at index {index}"),
            Self::Type => f.write_str("type descriptor"),
        }
    }
}

impl GuardError {
    pub fn invalid_argument(
        name: &ArgumentName<'_>,
        actual: impl fmt::Display,
        requirement: impl fmt::Display,
    ) -> Self {
        Self::InvalidArgument {
            name: name.to_label(),
            actual: actual.to_string(),
            requirement: requirement.to_string(),
        }
    }

    pub fn type_mismatch(
        name: &ArgumentName<'_>,
        actual_type: impl Into<String>,
        expected_type: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            name: name.to_label(),
            actual_type: actual_type.into(),
            expected_type: expected_type.into(),
        }
    }

    pub fn null_reference(name: &ArgumentName<'_>, subject: NullSubject) -> Self {
        Self::NullReference { name: name.to_label(), subject }
    }

    /// Failure channel of this error; context wrappers report the kind of what they wrap.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            Self::NullReference { .. } => ErrorKind::NullReference,
            _ => ErrorKind::InvalidArgument,
        }
    }

    #[must_use]
    pub fn is_null_reference(&self) -> bool {
        self.kind() == ErrorKind::NullReference
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// The innermost guard error beneath any number of context layers.
    #[must_use]
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Label of the rejected argument, if the caller supplied one.
    #[must_use]
    pub fn argument_name(&self) -> Option<&str> {
        match self.root() {
            Self::InvalidArgument { name, .. }
            | Self::TypeMismatch { name, .. }
            | Self::NullReference { name, .. } => name.as_deref(),
            Self::Context { .. } => None,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> GuardResult<T>;
    fn with_context<F>(self, f: F) -> GuardResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<GuardError>,
{
    fn context(self, context: impl Into<String>) -> GuardResult<T> {
        self.map_err(|e| GuardError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> GuardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GuardError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
