//! Custom error types for the matroid-database crate.

use thiserror::Error;

/// Coverage catalogue for the bundled dataset.
///
/// Appended verbatim to [`DatabaseError::ResourceUnavailable`] so a failed
/// lookup tells the caller which `(n, r)` pairs the dataset actually covers.
/// `*` means any rank, `*-5` means any rank except 5, `|` separates ranges.
pub const AVAILABLE: &str = "Available (n, r):\n\
all: (<=9, *), (10, *-5), (11, <=3|>=8), (12, <=3|>=10)\n\
unorientable: (7-11, 3), (7-9, 4)";

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The requested `(category, n, r)` has no backing resource, in either
    /// plain or compressed form. The message enumerates the known coverage.
    #[error("unable to open {identifier}.txt(.xz)\n{available}")]
    ResourceUnavailable {
        identifier: String,
        available: &'static str,
    },

    /// A revlex string's length disagrees with the number of `r`-subsets of
    /// the ground set, so it cannot be aligned with the subset index.
    #[error("malformed revlex record: expected {expected} characters, found {found}")]
    MalformedRecord { expected: usize, found: usize },
}

impl DatabaseError {
    pub(crate) fn unavailable(identifier: String) -> Self {
        DatabaseError::ResourceUnavailable {
            identifier,
            available: AVAILABLE,
        }
    }
}

/// A convenience `Result` type alias using the crate's `DatabaseError` type.
pub type Result<T> = std::result::Result<T, DatabaseError>;
