/// An extension trait for floating point numbers.
///
/// The trait pre-computes the rounding factor for equality comparisons, which
/// depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// A number's precision is limited by multiplying it with this factor and
    /// rounding the product. Since the factor is a power of ten, it translates
    /// directly into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}
