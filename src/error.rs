//! Error types for table loading and artifact generation.

use std::path::PathBuf;

use thiserror::Error;

/// Problems detected while building a [`TranslationTable`](crate::translation::TranslationTable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An entry has an empty original message, which would match empty first lines.
    #[error("entry {id} has an empty original message")]
    EmptyOriginal { id: String },

    /// Two entries share an original message but disagree on its replacement.
    #[error(
        "entries {first_id} and {second_id} both translate {original:?} but disagree: {first:?} vs {second:?}"
    )]
    ConflictingDuplicate {
        original: String,
        first_id: String,
        first: String,
        second_id: String,
        second: String,
    },
}

/// Failures while rendering or writing the generated files.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The translation table did not validate.
    #[error("invalid translation table: {0}")]
    Table(#[from] TableError),

    /// Writing an artifact to disk failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Marking a script as executable failed.
    #[error("failed to set permissions on {}: {source}", path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
