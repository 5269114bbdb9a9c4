//! # Ok 🌸 Delta
//!
//! Okdelta measures how different two colors look and picks the closest color
//! from a palette. Both operations work on colors that are already expressed
//! in the perceptually uniform [Oklab](https://bottosson.github.io/posts/oklab/)
//! color space, i.e., as triples of lightness *L* and the two chroma axes *a*
//! and *b*. Conversion into Oklab is the caller's business.
//!
//!
//! ## 1. Overview
//!
//! The crate's two operations are:
//!
//!   * [`delta_e_ok`] computes the **distance** between two Oklab colors. A
//!     [`DeltaVersion`] selects between plain Euclidian distance
//!     ([`DeltaVersion::V1`]) and Euclidian distance with doubled chroma
//!     differences ([`DeltaVersion::V2`]).
//!   * [`find_closest`] performs a linear **search** for the candidate color
//!     closest to some origin color, using the plain Euclidian distance. It
//!     returns the winner's one-based rank as well as coordinates, with the
//!     first candidate winning ties and rank zero indicating that there were
//!     no candidates. [`find_closest_with`] performs the same search with an
//!     arbitrary distance metric.
//!
//! ```
//! # use okdelta::{delta_e_ok, find_closest, DeltaVersion};
//! let orange = [0.7, 0.1, 0.13];
//! let palette = [[0.63, 0.22, 0.13], [0.8, 0.0, 0.16], [0.75, 0.12, 0.12]];
//!
//! let (rank, closest) = find_closest(&orange, &palette);
//! assert_eq!(rank, 3);
//! assert!(delta_e_ok(&orange, &closest, DeltaVersion::V2) < 0.1);
//! ```
//!
//! Both operations are pure functions without internal state. They are safe
//! to call from any number of threads at the same time.
//!
//!
//! ## 2. Optional Features
//!
//! Okdelta supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls okdelta's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod version;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use crate::core::{delta_e_ok, find_closest, find_closest_with};
pub use version::DeltaVersion;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn difference(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<DeltaVersion>()?;
    m.add_function(wrap_pyfunction!(crate::core::py_delta_e_oklab, m)?)?;
    m.add_function(wrap_pyfunction!(crate::core::py_closest_oklab, m)?)?;

    Ok(())
}
