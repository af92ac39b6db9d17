//! Outbound adapters implementing domain ports.
//!
//! - **directory**: in-memory customer directory standing in for the search
//!   collaborator, optionally loaded from a JSON file.

pub mod directory;
