//! Configuration error type.
use serde_json;
use std::{error, fmt, io, result};

/// A type for results generated by configuration lookups where the `Err` type is hard-wired to
/// `Error`.
pub type Result<T> = result::Result<T, Error>;

/// The error type for option resolution.
#[derive(Debug)]
pub enum Error {
    /// A malformed property source, such as a JSON document of the wrong shape.
    ArgumentError(String),
    /// A property marked as required has no value.
    MissingProperty(String),
    /// A property value names none of the allowed enumeration literals.
    UnknownEnumValue {
        property: String,
        value: String,
        allowed: Vec<&'static str>,
    },
    /// A property value could not be converted or was rejected by a validator.
    InvalidProperty {
        property: String,
        value: String,
        reason: String,
    },
    JsonError(serde_json::Error),
    /// A property file could not be opened.
    IoError(io::Error),
}

impl Error {
    pub fn invalid_property<P, V, R>(property: P, value: V, reason: R) -> Error
        where P: Into<String>,
              V: Into<String>,
              R: Into<String>
    {
        Error::InvalidProperty {
            property: property.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ArgumentError(ref inner) => inner.fmt(fmt),
            Error::MissingProperty(ref property) => {
                write!(fmt, "Missing value for required property '{}'.", property)
            }
            Error::UnknownEnumValue { ref property, ref value, ref allowed } => {
                write!(fmt,
                       "Unknown value '{}' for property '{}'. Supported values are: {}.",
                       value,
                       property,
                       allowed.join(", "))
            }
            Error::InvalidProperty { ref property, ref value, ref reason } => {
                write!(fmt,
                       "Invalid value '{}' for property '{}': {}",
                       value,
                       property,
                       reason)
            }
            Error::JsonError(ref inner) => inner.fmt(fmt),
            Error::IoError(ref inner) => inner.fmt(fmt),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::JsonError(ref inner) => Some(inner),
            Error::IoError(ref inner) => Some(inner),
            _ => None,
        }
    }
}
