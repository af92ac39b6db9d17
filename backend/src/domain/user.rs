//! Identity of the authenticated caller.
//!
//! The search endpoint never exposes user data; it only needs to know that
//! a session belongs to someone. [`UserId`] is what the session cookie
//! stores and what the authentication port hands back.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdError {
    /// The identifier was empty.
    Empty,
    /// The identifier was not a canonical UUID.
    Malformed,
}

impl fmt::Display for UserIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "user id must not be empty"),
            Self::Malformed => write!(f, "user id must be a valid UUID"),
        }
    }
}

impl std::error::Error for UserIdError {}

/// Stable user identifier, validated as a canonical UUID string.
///
/// # Examples
/// ```
/// use customer_search::domain::UserId;
///
/// let id = UserId::new("123e4567-e89b-12d3-a456-426614174000").unwrap();
/// assert_eq!(id.as_ref(), "123e4567-e89b-12d3-a456-426614174000");
/// assert!(UserId::new(" 123e4567-e89b-12d3-a456-426614174000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserIdError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserIdError::Empty);
        }
        if raw.trim() != raw {
            return Err(UserIdError::Malformed);
        }
        Uuid::parse_str(raw).map_err(|_| UserIdError::Malformed)?;
        Ok(Self(raw.to_owned()))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UserIdError::Empty)]
    #[case("not-a-uuid", UserIdError::Malformed)]
    #[case(" 123e4567-e89b-12d3-a456-426614174000", UserIdError::Malformed)]
    fn rejects_invalid_ids(#[case] raw: &str, #[case] expected: UserIdError) {
        assert_eq!(UserId::new(raw), Err(expected));
    }

    #[rstest]
    fn serde_uses_plain_string() {
        let id = UserId::new("123e4567-e89b-12d3-a456-426614174000").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialise");
        assert_eq!(json, "\"123e4567-e89b-12d3-a456-426614174000\"");
        let back: UserId = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, id);
    }
}
