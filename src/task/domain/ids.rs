//! Identifier types for the task board domain.
//!
//! The hosted document store hands out opaque string identifiers, so every
//! identifier here is a validated, non-empty string newtype. Deserializing
//! goes through the same validation as [`TaskId::new`] and friends.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier.
            ///
            /// # Errors
            ///
            /// Returns [`TaskDomainError::EmptyIdentifier`] when the value is
            /// empty after trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
                let raw = value.into();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(TaskDomainError::EmptyIdentifier($kind));
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = TaskDomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Unique identifier of a task document.
    TaskId,
    "task"
);

string_id!(
    /// Identifier of the workspace a task belongs to.
    WorkspaceId,
    "workspace"
);

string_id!(
    /// Identifier of the project a task belongs to.
    ProjectId,
    "project"
);

string_id!(
    /// Identifier of the workspace member assigned to a task.
    MemberId,
    "member"
);

impl TaskId {
    /// Mints a fresh identifier for a newly created task.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}
