/////////////////////////////////////////////////////////////////////////////////////////////
//
// Supplies the distance helpers shared by the kernel, derivative and ufunc modules.
//
// Created on: 18 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use faer::RowRef;

/// Calculates the euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use faer::mat;
/// use polyharmonic_rbf::get_distance;
///
/// let points = mat![
///     [1.0, 2.0],
///     [4.0, 6.0],
/// ];
///
/// let target = points.row(0);
/// let source = points.row(1);
///
/// let dist = get_distance(target, source);
///
/// assert_eq!(dist, 5.0);
/// ```
#[inline(always)]
pub fn get_distance(target: RowRef<f64>, source: RowRef<f64>) -> f64 {
    get_distance_sq(target, source).sqrt()
}

/// Returns the squared Euclidean distance between two points.
#[inline(always)]
pub fn get_distance_sq(target: RowRef<f64>, source: RowRef<f64>) -> f64 {
    debug_assert_eq!(
        target.ncols(),
        source.ncols(),
        "target and source points must have the same dimension"
    );
    let mut dist = 0.0;
    for (t, s) in target.iter().zip(source.iter()) {
        let diff = t - s;
        dist += diff * diff;
    }
    dist
}

/// Returns the squared Euclidean distance between `(x0, x1)` and `(c0, c1)`.
#[inline(always)]
pub fn distance_sq_2d(x0: f64, x1: f64, c0: f64, c1: f64) -> f64 {
    let d0 = x0 - c0;
    let d1 = x1 - c1;
    d0 * d0 + d1 * d1
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::mat;

    #[test]
    fn row_and_scalar_distances_agree() {
        let points = mat![[0.25, -1.5], [3.0, 0.125f64]];
        let row_sq = get_distance_sq(points.row(0), points.row(1));
        let scalar_sq = distance_sq_2d(0.25, -1.5, 3.0, 0.125);
        assert_eq!(row_sq, scalar_sq);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "same dimension")]
    fn mismatched_dimensions_are_caught_in_debug_builds() {
        let planar = mat![[1.0, 2.0f64]];
        let spatial = mat![[1.0, 2.0, 3.0f64]];
        get_distance_sq(planar.row(0), spatial.row(0));
    }

    #[test]
    fn distance_handles_three_dimensions() {
        let points = mat![[1.0, 2.0, 2.0], [0.0, 0.0, 0.0f64]];
        assert_eq!(get_distance(points.row(0), points.row(1)), 3.0);
    }
}
