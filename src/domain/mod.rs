use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named counter as exposed over the HTTP API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub counter: u64,
}

/// Errors the counter store can report to callers.
///
/// Display strings double as the HTTP error messages, so the wording is
/// part of the API contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CounterError {
    #[error("Counter {0} already exists")]
    AlreadyExists(String),

    #[error("Counter {0} does not exist")]
    NotFound(String),
}
