use std::error;
use std::fmt;
use std::result;

/// Errors returned by fallible map accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested key does not exist in the map.
    ElementNotFound,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ElementNotFound => write!(f, "element not found"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
