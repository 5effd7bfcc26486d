//! Strongly-typed value objects used by the query layer.
//!
//! These wrappers enforce the pagination invariants (strictly positive page
//! number and page size) so that once a value reaches the pipeline it can be
//! used for slicing without further checks.
use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided page number is zero or negative.
    #[error("page must be greater than zero, got {0}")]
    NonPositivePage(i64),
    /// Provided page size is zero or negative.
    #[error("page size must be greater than zero, got {0}")]
    NonPositivePageSize(i64),
}

/// Macro to generate lightweight newtypes for positive pagination values.
macro_rules! positive_newtype {
    ($name:ident, $err:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Creates a new value ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                match usize::try_from(value) {
                    Ok(v) if v > 0 => Ok(Self(v)),
                    _ => Err(TypeConstraintError::$err(value)),
                }
            }

            /// Returns the raw `usize` backing this value.
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

positive_newtype!(PageNumber, NonPositivePage, "One-based page number.");
positive_newtype!(PageSize, NonPositivePageSize, "Number of records per page.");
