//! Customer records and the validated search query.
//!
//! Customers are read-only and sourced from the search collaborator. The
//! identifier is opaque: this service never interprets it beyond requiring
//! it to be non-blank.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors for [`CustomerId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerIdError {
    /// The identifier was empty or whitespace.
    Blank,
}

impl fmt::Display for CustomerIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "customer id must not be blank"),
        }
    }
}

impl std::error::Error for CustomerIdError {}

/// Opaque, stable customer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Validate and construct a [`CustomerId`].
    pub fn new(id: impl Into<String>) -> Result<Self, CustomerIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CustomerIdError::Blank);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CustomerId> for String {
    fn from(value: CustomerId) -> Self {
        value.0
    }
}

impl TryFrom<String> for CustomerId {
    type Error = CustomerIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Customer record as exposed by the search endpoint.
///
/// # Examples
/// ```
/// use customer_search::domain::{Customer, CustomerId};
///
/// let customer = Customer::new(
///     CustomerId::new("1").unwrap(),
///     "John Doe",
///     "john@x.com",
/// );
/// let json = serde_json::to_value(&customer).unwrap();
/// assert_eq!(json["name"], "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    #[schema(value_type = String, example = "1")]
    id: CustomerId,
    #[schema(example = "John Doe")]
    name: String,
    #[schema(example = "john@x.com")]
    email: String,
}

impl Customer {
    /// Build a customer record.
    pub fn new(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email, display only.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Reasons a raw `query` parameter is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerQueryError {
    /// The parameter was not supplied at all.
    Missing,
    /// The parameter was supplied but blank.
    Empty,
}

impl fmt::Display for CustomerQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "query is required"),
            Self::Empty => write!(f, "query must not be empty"),
        }
    }
}

impl std::error::Error for CustomerQueryError {}

/// Free-text customer search, trimmed and guaranteed non-empty.
///
/// # Examples
/// ```
/// use customer_search::domain::{CustomerQuery, CustomerQueryError};
///
/// let query = CustomerQuery::from_param(Some("  jo ")).unwrap();
/// assert_eq!(query.as_str(), "jo");
/// assert_eq!(CustomerQuery::from_param(None), Err(CustomerQueryError::Missing));
/// assert_eq!(CustomerQuery::from_param(Some(" ")), Err(CustomerQueryError::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerQuery(String);

impl CustomerQuery {
    /// Validate an optional raw query parameter.
    pub fn from_param(raw: Option<&str>) -> Result<Self, CustomerQueryError> {
        let raw = raw.ok_or(CustomerQueryError::Missing)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CustomerQueryError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Query text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Number of characters in the query, safe to log.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Ordered search result set returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct CustomerSearchResult {
    /// Matches in the order the search collaborator ranked them.
    pub customers: Vec<Customer>,
}
