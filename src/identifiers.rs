//! Domain identifier types for search states.
//!
//! The search layer never keys its maps on full board values; every state is
//! addressed by a [`StateId`] wrapping the board's canonical text encoding.
//! State identity is therefore a pure derived value, never the hash of a
//! mutable structure.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Unique identifier for a board state in the search graph.
///
/// A `StateId` is the canonical 49-character `-0X` encoding of a board
/// (see [`Board::encode`]); two boards produce the same id iff their cell
/// sequences are equal.
///
/// # Examples
///
/// ```
/// use pegsol::identifiers::StateId;
///
/// let id = StateId::new("--000----0X0--00XXX00000X000000X000--000----000--");
/// assert_eq!(id.as_str().len(), 49);
/// ```
///
/// [`Board::encode`]: crate::board::Board::encode
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(String);

impl StateId {
    /// Create a new state identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the identifier into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<StateId> for &str {
    fn eq(&self, other: &StateId) -> bool {
        *self == other.as_str()
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for StateId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for StateId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
