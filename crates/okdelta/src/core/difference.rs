#[cfg(feature = "pyffi")]
use pyo3::{prelude::*, types::PyTuple};

use crate::{DeltaVersion, Float};

/// Compute Delta-E for two Oklab colors.
///
/// This function computes the Euclidian distance between the two triples of
/// Oklab coordinates. For [`DeltaVersion::V2`], it first scales the
/// differences along the *a* and *b* axes by [`DeltaVersion::weight`].
/// Coordinates are not normalized, clamped, or checked; the result is only
/// meaningful for finite inputs.
///
/// # Examples
///
/// ```
/// # use okdelta::{assert_close_enough, delta_e_ok, DeltaVersion};
/// let gray = [0.6, 0.0, 0.0];
/// let tinted = [0.6, 0.03, 0.04];
/// assert_close_enough!(delta_e_ok(&gray, &tinted, DeltaVersion::V1), 0.05);
/// assert_close_enough!(delta_e_ok(&gray, &tinted, DeltaVersion::V2), 0.1);
/// assert_eq!(delta_e_ok(&tinted, &tinted, DeltaVersion::V2), 0.0);
/// ```
#[allow(non_snake_case)]
#[must_use = "function returns the distance and has no side effects"]
pub fn delta_e_ok(reference: &[Float; 3], other: &[Float; 3], version: DeltaVersion) -> Float {
    let [L1, a1, b1] = *reference;
    let [L2, a2, b2] = *other;
    let weight = version.weight();

    let ΔL = L1 - L2;
    let Δa = weight * (a1 - a2);
    let Δb = weight * (b1 - b2);

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

/// Find the candidate color closest to the origin.
///
/// This function delegates to [`find_closest_with`] using [`delta_e_ok`] with
/// [`DeltaVersion::V1`], i.e., the plain Euclidian distance in Oklab.
///
/// It returns the *one-based* rank of the closest candidate together with that
/// candidate's coordinates. If several candidates are equally close, the first
/// one wins. If there are no candidates, it returns zero and the origin's
/// coordinates.
///
/// # Examples
///
/// ```
/// # use okdelta::{find_closest, Float};
/// let candidates = [[5.0, 5.0, 5.0], [0.1, 0.1, 0.1], [2.0, 2.0, 2.0]];
/// assert_eq!(find_closest(&[0.0, 0.0, 0.0], &candidates), (2, [0.1, 0.1, 0.1]));
///
/// let nothing: [[Float; 3]; 0] = [];
/// assert_eq!(find_closest(&[0.5, 0.1, -0.1], &nothing), (0, [0.5, 0.1, -0.1]));
/// ```
pub fn find_closest<'c, C>(origin: &[Float; 3], candidates: C) -> (usize, [Float; 3])
where
    C: IntoIterator<Item = &'c [Float; 3]>,
{
    find_closest_with(origin, candidates, |c1, c2| {
        delta_e_ok(c1, c2, DeltaVersion::V1)
    })
}

/// Find the candidate color closest to the origin with the given metric.
/// <i class=rust-only>Rust only!</i>
///
/// This function compares the origin to every candidate color in order,
/// computing the distance with the given function, and keeps the candidate
/// with strictly smaller distance than all before it. It returns that
/// candidate's one-based rank and coordinates, or zero and the origin's
/// coordinates if there are no candidates. The distance metric is declared
/// `mut` to allow for stateful comparisons.
///
/// The first candidate is always accepted, even if its distance overflows to
/// infinity. Hence the rank is zero if and only if there are no candidates.
///
/// # Examples
///
/// ```
/// # use okdelta::{delta_e_ok, find_closest_with, DeltaVersion};
/// let origin = [0.5, 0.0, 0.0];
/// let candidates = [[0.5, 0.06, 0.0], [0.6, 0.0, 0.0]];
///
/// let (rank, _) = find_closest_with(&origin, &candidates, |c1, c2| {
///     delta_e_ok(c1, c2, DeltaVersion::V1)
/// });
/// assert_eq!(rank, 1);
///
/// let (rank, _) = find_closest_with(&origin, &candidates, |c1, c2| {
///     delta_e_ok(c1, c2, DeltaVersion::V2)
/// });
/// assert_eq!(rank, 2);
/// ```
pub fn find_closest_with<'c, C, F>(
    origin: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> (usize, [Float; 3])
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_rank = 0;
    let mut min_color = *origin;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if min_rank == 0 || distance < min_distance {
            min_distance = distance;
            min_rank = index + 1;
            min_color = *candidate;
        }
    }

    (min_rank, min_color)
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the difference between two Oklab colors. <i
/// class=python-only>Python only!</i>
///
/// This function takes the six coordinates as separate arguments and the
/// version as keyword-only integer argument, defaulting to 1. It raises a
/// `ValueError` for versions other than 1 or 2.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "delta_e_oklab", signature = (L1, a1, b1, L2, a2, b2, *, version = 1))]
#[allow(non_snake_case, clippy::too_many_arguments)]
pub fn py_delta_e_oklab(
    L1: Float,
    a1: Float,
    b1: Float,
    L2: Float,
    a2: Float,
    b2: Float,
    version: usize,
) -> PyResult<Float> {
    let version = DeltaVersion::try_from(version)?;
    Ok(delta_e_ok(&[L1, a1, b1], &[L2, a2, b2], version))
}

/// Find the candidate Oklab color closest to the origin. <i
/// class=python-only>Python only!</i>
///
/// This function takes the candidates as variadic arguments and returns the
/// winner's one-based rank and coordinates as a tuple. If there are no
/// candidates, it returns zero and the origin's coordinates.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "closest_oklab", signature = (origin, *candidates))]
pub fn py_closest_oklab(
    origin: (Float, Float, Float),
    candidates: &Bound<'_, PyTuple>,
) -> PyResult<(usize, (Float, Float, Float))> {
    let origin: [Float; 3] = origin.into();
    let candidates = candidates
        .iter()
        .map(|c| c.extract::<(Float, Float, Float)>().map(<[Float; 3]>::from))
        .collect::<PyResult<Vec<_>>>()?;

    let (rank, color) = find_closest(&origin, &candidates);
    Ok((rank, color.into()))
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{delta_e_ok, find_closest, find_closest_with};
    use crate::core::assert_same_coordinates;
    use crate::{assert_close_enough, DeltaVersion, Float};

    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rand_distr::Normal;

    const VERSIONS: [DeltaVersion; 2] = [DeltaVersion::V1, DeltaVersion::V2];

    /// Generate pseudo-random Oklab coordinates with normally distributed
    /// chroma axes.
    fn random_colors(seed: u64, count: usize) -> Vec<[Float; 3]> {
        let mut rng = StdRng::seed_from_u64(seed);
        let chroma = Normal::new(0.0, 0.15).expect("standard deviation is positive");

        (0..count)
            .map(|_| {
                [
                    rng.random_range(0.0..=1.0),
                    rng.sample(chroma),
                    rng.sample(chroma),
                ]
            })
            .collect()
    }

    #[test]
    fn test_delta_e() {
        let black = [0.0, 0.0, 0.0];
        let white = [1.0, 0.0, 0.0];
        let tinted = [0.0, 0.3, 0.4];

        assert_eq!(delta_e_ok(&black, &white, DeltaVersion::V1), 1.0);
        assert_eq!(delta_e_ok(&black, &white, DeltaVersion::V2), 1.0);
        assert_close_enough!(delta_e_ok(&black, &tinted, DeltaVersion::V1), 0.5);
        assert_close_enough!(delta_e_ok(&black, &tinted, DeltaVersion::V2), 1.0);

        // Lightness is never scaled, chroma always is.
        let mixed = [0.5, 0.3, -0.4];
        assert_close_enough!(
            delta_e_ok(&black, &mixed, DeltaVersion::V2),
            (0.25 as Float + 0.36 + 0.64).sqrt()
        );
    }

    #[test]
    fn test_delta_e_properties() {
        let colors = random_colors(665, 200);

        for pair in colors.chunks_exact(2) {
            let (x, y) = (&pair[0], &pair[1]);

            for version in VERSIONS {
                assert_eq!(delta_e_ok(x, x, version), 0.0);
                assert_eq!(delta_e_ok(x, y, version), delta_e_ok(y, x, version));
                assert!(delta_e_ok(x, y, version) >= 0.0);
            }

            let d1 = delta_e_ok(x, y, DeltaVersion::V1);
            let d2 = delta_e_ok(x, y, DeltaVersion::V2);
            assert!(d1 <= d2, "V1 should not exceed V2:\n{:?}\n{:?}", d1, d2);

            // Same chroma means same distance.
            let z = [y[0], x[1], x[2]];
            assert_eq!(
                delta_e_ok(x, &z, DeltaVersion::V1),
                delta_e_ok(x, &z, DeltaVersion::V2)
            );
        }
    }

    #[test]
    fn test_find_closest() {
        let nothing: [[Float; 3]; 0] = [];
        assert_eq!(
            find_closest(&[0.5, 0.1, -0.1], &nothing),
            (0, [0.5, 0.1, -0.1])
        );

        assert_eq!(
            find_closest(&[0.0, 0.0, 0.0], &[[1.0, 1.0, 1.0]]),
            (1, [1.0, 1.0, 1.0])
        );

        assert_eq!(
            find_closest(&[0.0, 0.0, 0.0], &[[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0]]),
            (1, [1.0, 0.0, 0.0])
        );

        let (rank, color) = find_closest(
            &[0.0, 0.0, 0.0],
            &[[5.0, 5.0, 5.0], [0.1, 0.1, 0.1], [2.0, 2.0, 2.0]],
        );
        assert_eq!(rank, 2);
        assert_same_coordinates!(&color, &[0.1, 0.1, 0.1]);
    }

    #[test]
    fn test_find_closest_ties() {
        let origin = [0.5, 0.0, 0.0];
        let ring = [
            [0.5, 0.1, 0.0],
            [0.5, 0.0, 0.1],
            [0.5, -0.1, 0.0],
            [0.5, 0.0, -0.1],
        ];
        assert_eq!(find_closest(&origin, &ring), (1, ring[0]));

        // A closer candidate later on still wins.
        let mut more = ring.to_vec();
        more.push([0.5, 0.05, 0.0]);
        assert_eq!(find_closest(&origin, &more), (5, [0.5, 0.05, 0.0]));

        // An exact match, however, cannot be beaten.
        more.insert(2, origin);
        assert_eq!(find_closest(&origin, &more), (3, origin));
    }

    #[test]
    fn test_find_closest_rank() {
        let colors = random_colors(42, 100);
        let (origin, candidates) = colors.split_first().expect("colors are not empty");

        let (rank, color) = find_closest(origin, candidates);
        assert!(0 < rank && rank <= candidates.len());
        assert_eq!(candidates[rank - 1], color);

        let best = delta_e_ok(origin, &color, DeltaVersion::V1);
        for (index, candidate) in candidates.iter().enumerate() {
            let distance = delta_e_ok(origin, candidate, DeltaVersion::V1);
            if index + 1 < rank {
                assert!(best < distance);
            } else {
                assert!(best <= distance);
            }
        }
    }

    #[test]
    fn test_find_closest_with() {
        let origin = [0.0, 0.0, 0.0];
        let candidates = [[3.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];

        let mut calls = 0;
        let (rank, color) = find_closest_with(&origin, &candidates, |c1, c2| {
            calls += 1;
            delta_e_ok(c1, c2, DeltaVersion::V1)
        });
        assert_eq!((rank, color), (2, [1.0, 0.0, 0.0]));
        assert_eq!(calls, 3);

        let mut calls = 0;
        let nothing: Vec<[Float; 3]> = Vec::new();
        let result = find_closest_with(&origin, &nothing, |_, _| {
            calls += 1;
            0.0
        });
        assert_eq!(result, (0, origin));
        assert_eq!(calls, 0);

        // Overflowing distances still select the first candidate.
        let huge = [[Float::MAX, 0.0, 0.0], [-Float::MAX, 0.0, 0.0]];
        assert_eq!(find_closest(&origin, &huge), (1, huge[0]));
    }
}
