//! Error types

use core::fmt::{Display, Formatter};

use crate::types::NameError;

/// General error type for this crate.
///
/// Only construction can fail; the tick path is infallible by design.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An invalid component or port name.
    Name(NameError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Name(e) => write!(f, "Invalid name: {e}"),
        }
    }
}

impl From<NameError> for Error {
    fn from(value: NameError) -> Self {
        Error::Name(value)
    }
}
