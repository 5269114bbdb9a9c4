#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::InvalidVersionError;
use crate::Float;

/// A choice of weightings for the Oklab distance metric.
///
/// The first version computes the plain Euclidian distance between Oklab
/// coordinates. The second version scales the differences along the *a* and
/// *b* chroma axes by two before computing the Euclidian distance, which
/// accounts for the eye being more sensitive to changes in chroma than Oklab's
/// coordinates suggest. The factor [probably is closer to
/// 2.1](https://github.com/w3c/csswg-drafts/issues/6642#issuecomment-945714988),
/// but for now it stays at exactly 2.
///
/// Raw integers convert with `TryFrom`, which fails with an
/// [`InvalidVersionError`] for anything other than 1 or 2.
///
/// # Examples
///
/// ```
/// # use okdelta::DeltaVersion;
/// # use okdelta::error::InvalidVersionError;
/// assert_eq!(DeltaVersion::default(), DeltaVersion::V1);
/// assert_eq!(DeltaVersion::try_from(2_u8)?, DeltaVersion::V2);
/// assert_eq!(DeltaVersion::V2.weight(), 2.0);
/// assert!(DeltaVersion::try_from(0_u8).is_err());
/// # Ok::<(), InvalidVersionError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "okdelta.difference")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeltaVersion {
    /// Plain Euclidian distance.
    V1 = 1,
    /// Euclidian distance with doubled chroma differences.
    V2 = 2,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl DeltaVersion {
    /// Determine the weight applied to differences along the *a* and *b* axes.
    pub const fn weight(&self) -> Float {
        match *self {
            Self::V1 => 1.0,
            Self::V2 => 2.0,
        }
    }

    /// Create a human-readable representation for this version. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Default for DeltaVersion {
    /// Create the default version, which is [`DeltaVersion::V1`].
    fn default() -> Self {
        Self::V1
    }
}

impl TryFrom<usize> for DeltaVersion {
    type Error = InvalidVersionError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            _ => Err(InvalidVersionError::new(value)),
        }
    }
}

impl TryFrom<u8> for DeltaVersion {
    type Error = InvalidVersionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(usize::from(value))
    }
}

impl From<DeltaVersion> for u8 {
    fn from(value: DeltaVersion) -> u8 {
        value as u8
    }
}

impl std::fmt::Display for DeltaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match *self {
            Self::V1 => "V1",
            Self::V2 => "V2",
        };

        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::DeltaVersion;
    use crate::error::InvalidVersionError;

    #[test]
    fn test_conversion() -> Result<(), InvalidVersionError> {
        assert_eq!(DeltaVersion::try_from(1_u8)?, DeltaVersion::V1);
        assert_eq!(DeltaVersion::try_from(2_usize)?, DeltaVersion::V2);
        assert_eq!(u8::from(DeltaVersion::V1), 1);
        assert_eq!(u8::from(DeltaVersion::V2), 2);

        for value in [0_usize, 3, 21, usize::MAX] {
            assert_eq!(
                DeltaVersion::try_from(value),
                Err(InvalidVersionError::new(value))
            );
        }

        Ok(())
    }

    #[test]
    fn test_weight() {
        assert_eq!(DeltaVersion::default().weight(), 1.0);
        assert_eq!(DeltaVersion::V1.weight(), 1.0);
        assert_eq!(DeltaVersion::V2.weight(), 2.0);
        assert_eq!(DeltaVersion::V2.to_string(), "V2");
    }
}
