/////////////////////////////////////////////////////////////////////////////////////////////
//
// Elementwise (ufunc-style) evaluation of the kernel with length-1 broadcasting.
//
// Created on: 18 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Elementwise kernel evaluation.
//!
//! Each output element pairs the `i`-th entry of every argument, where an
//! argument of length 1 is repeated to the common length. No pairwise
//! (matrix) evaluation is performed here.

use crate::{
    KernelFunction,
    derivatives::DiffOrder,
    error::{KernelError, Result},
    rbf_kernels::{Phs7RbfKernel, evaluate_rbf_kernel},
};
use faer::{Col, MatRef};

/// Resolves the common length of a set of broadcast arguments.
fn broadcast_len(args: &[(&'static str, &[f64])]) -> Result<usize> {
    let n = args
        .iter()
        .map(|(_, a)| a.len())
        .find(|&len| len != 1)
        .unwrap_or(1);

    for &(argument, a) in args {
        if a.len() != 1 && a.len() != n {
            return Err(KernelError::LengthMismatch {
                argument,
                expected: n,
                got: a.len(),
            });
        }
    }

    Ok(n)
}

#[inline(always)]
fn at(a: &[f64], i: usize) -> f64 {
    if a.len() == 1 { a[0] } else { a[i] }
}

/// Evaluates [`evaluate_rbf_kernel`] elementwise over broadcast slices.
///
/// # Errors
///
/// Returns [`KernelError::LengthMismatch`] if an argument has neither
/// length 1 nor the common length.
///
/// # Examples
///
/// ```
/// use polyharmonic_rbf::evaluate_rbf_kernel_broadcast;
///
/// let x0 = [0.0, 1.0, 3.0];
/// let x1 = [0.0, 0.0, 4.0];
///
/// let values = evaluate_rbf_kernel_broadcast(&x0, &x1, &[0.0], &[0.0], &[1.0]).unwrap();
/// assert_eq!(values[0], 0.0);
/// assert_eq!(values[1], 1.0);
/// assert_eq!(values.len(), 3);
/// ```
pub fn evaluate_rbf_kernel_broadcast(
    x0: &[f64],
    x1: &[f64],
    c0: &[f64],
    c1: &[f64],
    eps: &[f64],
) -> Result<Vec<f64>> {
    let n = broadcast_len(&[("x0", x0), ("x1", x1), ("c0", c0), ("c1", c1), ("eps", eps)])?;

    Ok((0..n)
        .map(|i| evaluate_rbf_kernel(at(x0, i), at(x1, i), at(c0, i), at(c1, i), at(eps, i)))
        .collect())
}

/// Evaluates a kernel derivative elementwise over broadcast slices.
///
/// # Errors
///
/// Returns [`KernelError::UnsupportedDerivative`] for derivative orders
/// above two, or [`KernelError::LengthMismatch`] for incompatible lengths.
pub fn evaluate_rbf_kernel_diff_broadcast(
    x0: &[f64],
    x1: &[f64],
    c0: &[f64],
    c1: &[f64],
    eps: &[f64],
    diff: DiffOrder,
) -> Result<Vec<f64>> {
    diff.check()?;
    let n = broadcast_len(&[("x0", x0), ("x1", x1), ("c0", c0), ("c1", c1), ("eps", eps)])?;

    (0..n)
        .map(|i| {
            Phs7RbfKernel::new(at(eps, i)).eval_diff(
                at(x0, i) - at(c0, i),
                at(x1, i) - at(c1, i),
                diff,
            )
        })
        .collect()
}

/// Evaluates `kernel` between row `i` of `targets` and row `i` of `sources`.
///
/// # Errors
///
/// Returns [`KernelError::ShapeMismatch`] if the two point arrays differ in shape.
///
/// # Examples
///
/// ```
/// use faer::mat;
/// use polyharmonic_rbf::{evaluate_paired_rows, kernels::Phs7RbfKernel};
///
/// let targets = mat![[1.0, 0.0], [3.0, 4.0f64]];
/// let sources = mat![[0.0, 0.0], [0.0, 0.0f64]];
///
/// let values = evaluate_paired_rows(&Phs7RbfKernel::new(1.0), targets.as_ref(), sources.as_ref()).unwrap();
/// assert_eq!(values[0], 1.0);
/// ```
pub fn evaluate_paired_rows<K>(
    kernel: &K,
    targets: MatRef<'_, f64>,
    sources: MatRef<'_, f64>,
) -> Result<Col<f64>>
where
    K: KernelFunction,
{
    if targets.shape() != sources.shape() {
        return Err(KernelError::ShapeMismatch {
            expected: targets.shape(),
            got: sources.shape(),
        });
    }

    Ok(Col::from_fn(targets.nrows(), |i| {
        kernel.evaluate(targets.row(i), sources.row(i))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate_rbf_kernel_diff;
    use faer::{Mat, mat};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vec(rng: &mut StdRng, n: usize) -> Vec<f64> {
        (0..n).map(|_| rng.random_range(-5.0..5.0)).collect()
    }

    #[test]
    fn broadcast_matches_scalar_evaluation() {
        let mut rng = StdRng::seed_from_u64(5);
        let n = 64;
        let x0 = random_vec(&mut rng, n);
        let x1 = random_vec(&mut rng, n);
        let c0 = random_vec(&mut rng, n);
        let eps = [0.7];
        let c1 = [1.5];

        let values = evaluate_rbf_kernel_broadcast(&x0, &x1, &c0, &c1, &eps).unwrap();
        assert_eq!(values.len(), n);
        for i in 0..n {
            assert_eq!(values[i], evaluate_rbf_kernel(x0[i], x1[i], c0[i], 1.5, 0.7));
        }
    }

    #[test]
    fn all_length_one_yields_single_value() {
        let values = evaluate_rbf_kernel_broadcast(&[3.0], &[4.0], &[0.0], &[0.0], &[1.0]).unwrap();
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn empty_arguments_broadcast_to_empty() {
        let values = evaluate_rbf_kernel_broadcast(&[], &[1.0], &[], &[0.0], &[1.0]).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn mismatched_lengths_are_reported() {
        let err = evaluate_rbf_kernel_broadcast(
            &[0.0, 1.0, 2.0],
            &[0.0, 1.0, 2.0],
            &[0.0, 1.0],
            &[0.0],
            &[1.0],
        )
        .unwrap_err();
        assert_eq!(
            err,
            KernelError::LengthMismatch {
                argument: "c0",
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn diff_broadcast_matches_scalar_evaluation() {
        let mut rng = StdRng::seed_from_u64(6);
        let n = 32;
        let x0 = random_vec(&mut rng, n);
        let x1 = random_vec(&mut rng, n);
        let eps: Vec<f64> = (0..n).map(|_| rng.random_range(0.1..2.0)).collect();

        for order in [DiffOrder::D_X0, DiffOrder::D_X0_X1, DiffOrder::D_X1_X1] {
            let values =
                evaluate_rbf_kernel_diff_broadcast(&x0, &x1, &[0.5], &[-0.5], &eps, order).unwrap();
            for i in 0..n {
                let expected = evaluate_rbf_kernel_diff(x0[i], x1[i], 0.5, -0.5, eps[i], order).unwrap();
                assert_eq!(values[i], expected);
            }
        }
    }

    #[test]
    fn diff_broadcast_rejects_unsupported_order_before_shapes() {
        let err = evaluate_rbf_kernel_diff_broadcast(
            &[0.0, 1.0],
            &[0.0],
            &[0.0, 1.0, 2.0],
            &[0.0],
            &[1.0],
            DiffOrder::new(0, 3),
        )
        .unwrap_err();
        assert_eq!(err, KernelError::UnsupportedDerivative { x0: 0, x1: 3 });
    }

    #[test]
    fn paired_rows_match_scalar_evaluation() {
        let mut rng = StdRng::seed_from_u64(8);
        let targets = Mat::from_fn(50, 2, |_, _| rng.random_range(-1.0..1.0));
        let sources = Mat::from_fn(50, 2, |_, _| rng.random_range(-1.0..1.0));
        let kernel = Phs7RbfKernel::new(1.3);

        let values = evaluate_paired_rows(&kernel, targets.as_ref(), sources.as_ref()).unwrap();
        assert_eq!(values.nrows(), 50);
        for i in 0..50 {
            let expected = evaluate_rbf_kernel(
                targets[(i, 0)],
                targets[(i, 1)],
                sources[(i, 0)],
                sources[(i, 1)],
                1.3,
            );
            assert_eq!(values[i], expected);
        }
    }

    #[test]
    fn paired_rows_reject_shape_mismatch() {
        let targets = mat![[0.0, 0.0], [1.0, 1.0f64]];
        let sources = mat![[0.0, 0.0f64]];
        let err = evaluate_paired_rows(&Phs7RbfKernel::new(1.0), targets.as_ref(), sources.as_ref())
            .unwrap_err();
        assert_eq!(
            err,
            KernelError::ShapeMismatch {
                expected: (2, 2),
                got: (1, 2)
            }
        );
    }
}
