mod difference;
mod equality;
mod math;

// difference
pub use difference::{delta_e_ok, find_closest, find_closest_with};
#[cfg(feature = "pyffi")]
pub(crate) use difference::{py_closest_oklab, py_delta_e_oklab};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;
