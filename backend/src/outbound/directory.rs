//! In-memory customer directory acting as the search collaborator.
//!
//! Customers are loaded once (from a JSON array or built in code) and
//! matched case-insensitively against name and email. Ranking favours name
//! prefixes, then word prefixes within the name, then any other substring
//! hit; ties keep source order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{CustomerSearch, CustomerSearchError};
use crate::domain::{Customer, CustomerQuery};

/// Errors raised while loading a directory file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryLoadError {
    /// The file could not be read.
    #[error("failed to read customer directory at '{path}': {message}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },
    /// The file is not a JSON array of customers.
    #[error("invalid customer directory JSON: {message}")]
    Parse {
        /// Parser message.
        message: String,
    },
    /// Two records share an identifier.
    #[error("duplicate customer id '{id}' in directory")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

fn first_duplicate(customers: &[Customer]) -> Option<String> {
    let mut seen = HashSet::with_capacity(customers.len());
    customers
        .iter()
        .find(|customer| !seen.insert(customer.id().as_ref()))
        .map(|customer| customer.id().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    NamePrefix,
    WordPrefix,
    Substring,
}

/// Searchable, immutable set of customers.
///
/// # Examples
/// ```
/// use customer_search::domain::{Customer, CustomerId};
/// use customer_search::outbound::directory::InMemoryCustomerDirectory;
///
/// let directory = InMemoryCustomerDirectory::new(vec![Customer::new(
///     CustomerId::new("1").unwrap(),
///     "John Doe",
///     "john@x.com",
/// )])
/// .unwrap();
/// assert_eq!(directory.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerDirectory {
    customers: Vec<Customer>,
}

impl InMemoryCustomerDirectory {
    /// Build a directory, rejecting duplicate identifiers.
    pub fn new(customers: Vec<Customer>) -> Result<Self, DirectoryLoadError> {
        if let Some(duplicate) = first_duplicate(&customers) {
            return Err(DirectoryLoadError::DuplicateId { id: duplicate });
        }
        Ok(Self { customers })
    }

    /// Parse a JSON array of `{ id, name, email }` records.
    pub fn from_json(json: &str) -> Result<Self, DirectoryLoadError> {
        let customers: Vec<Customer> =
            serde_json::from_str(json).map_err(|err| DirectoryLoadError::Parse {
                message: err.to_string(),
            })?;
        Self::new(customers)
    }

    /// Read and parse a directory file.
    pub fn load(path: &Path) -> Result<Self, DirectoryLoadError> {
        let io_error = |message: String| DirectoryLoadError::Io {
            path: path.to_path_buf(),
            message,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("path has no file name".to_owned()))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| io_error(err.to_string()))?;
        let json = dir
            .read_to_string(Path::new(file_name))
            .map_err(|err| io_error(err.to_string()))?;
        let directory = Self::from_json(&json)?;
        info!(path = %path.display(), customers = directory.len(), "customer directory loaded");
        Ok(directory)
    }

    /// Number of customers held.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the directory holds no customers.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    fn rank(customer: &Customer, needle: &str) -> Option<MatchRank> {
        let name = customer.name().to_lowercase();
        if name.starts_with(needle) {
            return Some(MatchRank::NamePrefix);
        }
        if name.split_whitespace().any(|word| word.starts_with(needle)) {
            return Some(MatchRank::WordPrefix);
        }
        if name.contains(needle) || customer.email().to_lowercase().contains(needle) {
            return Some(MatchRank::Substring);
        }
        None
    }

    /// Rank and truncate matches for `query`.
    pub fn matches(&self, query: &CustomerQuery, limit: usize) -> Vec<Customer> {
        let needle = query.as_str().to_lowercase();
        let mut ranked: Vec<(MatchRank, &Customer)> = self
            .customers
            .iter()
            .filter_map(|customer| Self::rank(customer, &needle).map(|rank| (rank, customer)))
            .collect();
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked
            .into_iter()
            .take(limit)
            .map(|(_, customer)| customer.clone())
            .collect()
    }
}

#[async_trait]
impl CustomerSearch for InMemoryCustomerDirectory {
    async fn search(
        &self,
        query: &CustomerQuery,
        limit: usize,
    ) -> Result<Vec<Customer>, CustomerSearchError> {
        Ok(self.matches(query, limit))
    }
}
