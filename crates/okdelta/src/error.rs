//! Utility module with okdelta's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An invalid version error.
///
/// This error indicates a number that does not identify one of the two
/// [`DeltaVersion`](crate::DeltaVersion)s, i.e., a number other than 1 or 2.
/// It only arises when converting raw integers; Rust code passing the enum
/// directly cannot trigger it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidVersionError {
    pub value: usize,
}

impl InvalidVersionError {
    /// Create a new invalid version error.
    pub fn new(value: impl Into<usize>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl std::fmt::Display for InvalidVersionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} is not a valid version; expected 1 or 2",
            self.value
        ))
    }
}

impl std::error::Error for InvalidVersionError {}

#[cfg(feature = "pyffi")]
impl From<InvalidVersionError> for PyErr {
    fn from(value: InvalidVersionError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::InvalidVersionError;

    #[test]
    fn test_message() {
        let error = InvalidVersionError::new(3_u8);
        assert_eq!(error.value, 3);
        assert_eq!(error.to_string(), "3 is not a valid version; expected 1 or 2");
    }
}
