//! Error types for name selection and allocation

use std::path::PathBuf;
use thiserror::Error;

use crate::pools::PoolKind;

/// Errors produced by the naming system
#[derive(Debug, Error)]
pub enum NamingError {
    /// A draw was attempted against a pool with no entries
    #[error("Cannot choose from empty {kind} pool")]
    EmptyPool { kind: PoolKind },

    /// Every redraw within the attempt budget produced an already-issued name
    #[error(
        "Unable to record full name '{first_name} {last_name}' after {attempts} attempts; \
         available names exhausted"
    )]
    NameSpaceExhausted {
        first_name: String,
        last_name: String,
        attempts: usize,
    },

    /// A candidate full name had a blank first or last name
    #[error("Full name candidate '{first_name}' '{last_name}' has an empty part")]
    EmptyName {
        first_name: String,
        last_name: String,
    },

    /// Word-list storage could not be read or written
    #[error("Word list I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NamingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NamingError::Io {
            path: path.into(),
            source,
        }
    }

    /// True if the error came from running out of unique names
    pub fn is_exhausted(&self) -> bool {
        matches!(self, NamingError::NameSpaceExhausted { .. })
    }
}
