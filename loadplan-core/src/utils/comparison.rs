#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// A tolerance used for geometric comparisons (in meters).
pub const GEOMETRY_EPSILON: Float = 1e-6;

/// Compares floating point numbers treating NaN as the greatest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Compares floating point references.
#[inline]
pub fn compare_floats_refs(a: &Float, b: &Float) -> Ordering {
    compare_floats(*a, *b)
}

/// Checks whether two values are equal within geometry tolerance.
#[inline]
pub fn is_close(a: Float, b: Float) -> bool {
    (a - b).abs() < GEOMETRY_EPSILON
}

/// Checks whether `a` does not exceed `b` within geometry tolerance.
#[inline]
pub fn is_not_greater(a: Float, b: Float) -> bool {
    a <= b + GEOMETRY_EPSILON
}
