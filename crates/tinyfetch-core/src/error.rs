//! Error returned when a configuration keyword is not recognized.

use std::fmt;

/// A keyword that does not name any variant of the expected enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    /// What was being parsed ("color", "module type", ...).
    pub expected: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownName {
    pub(crate) fn new(expected: &'static str, value: &str) -> Self {
        Self {
            expected,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.expected, self.value)
    }
}

impl std::error::Error for UnknownName {}
