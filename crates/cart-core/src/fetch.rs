//! # Fetch State
//!
//! The three observable states of a one-shot remote load.

use crate::error::{CatalogError, CatalogResult};
use serde::Serialize;

/// Pending until the single fetch resolves, then success or failure for good.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Success(T),
    Failure(CatalogError),
}

impl<T> FetchState<T> {
    pub fn from_result(result: CatalogResult<T>) -> Self {
        match result {
            Ok(data) => FetchState::Success(data),
            Err(err) => FetchState::Failure(err),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchState::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchState::Failure(_))
    }

    /// Loaded data, if the fetch succeeded
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            FetchState::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Short label for logs and the health endpoint
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Pending => FetchStatus::Pending,
            FetchState::Success(_) => FetchStatus::Success,
            FetchState::Failure(_) => FetchStatus::Failure,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Pending
    }
}

/// Data-free discriminant of [`FetchState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Pending,
    Success,
    Failure,
}
