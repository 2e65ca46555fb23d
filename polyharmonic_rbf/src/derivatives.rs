/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements closed-form spatial derivatives of the order-7 polyharmonic kernel.
//
// Created on: 18 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Partial derivatives of `phi = (eps * r)^7` with respect to the evaluation point.
//!
//! With `dx = x0 - c0`, `dy = x1 - c1` and `E = eps^7`:
//!
//! | order  | value                      |
//! |--------|----------------------------|
//! | (1, 0) | `7 E r^5 dx`               |
//! | (0, 1) | `7 E r^5 dy`               |
//! | (2, 0) | `7 E (r^5 + 5 r^3 dx^2)`   |
//! | (1, 1) | `35 E r^3 dx dy`           |
//! | (0, 2) | `7 E (r^5 + 5 r^3 dy^2)`   |
//!
//! Every derivative up to order six vanishes at the center, so the same
//! exact-zero guard as the kernel itself gives the correct limit.

use crate::{
    constants::MAX_DIFF_ORDER,
    error::{KernelError, Result},
    rbf_kernels::Phs7RbfKernel,
};
use serde::{Deserialize, Serialize};

/// Partial derivative multi-index with respect to the evaluation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DiffOrder {
    /// Order of differentiation along the first coordinate.
    pub x0: u8,
    /// Order of differentiation along the second coordinate.
    pub x1: u8,
}

impl DiffOrder {
    /// The kernel value itself.
    pub const VALUE: DiffOrder = DiffOrder::new(0, 0);
    pub const D_X0: DiffOrder = DiffOrder::new(1, 0);
    pub const D_X1: DiffOrder = DiffOrder::new(0, 1);
    pub const D_X0_X0: DiffOrder = DiffOrder::new(2, 0);
    pub const D_X0_X1: DiffOrder = DiffOrder::new(1, 1);
    pub const D_X1_X1: DiffOrder = DiffOrder::new(0, 2);

    pub const fn new(x0: u8, x1: u8) -> Self {
        DiffOrder { x0, x1 }
    }

    /// Total order of differentiation.
    #[inline(always)]
    pub fn total(&self) -> u16 {
        self.x0 as u16 + self.x1 as u16
    }

    /// Returns an error unless the multi-index has a closed form.
    #[inline]
    pub fn check(&self) -> Result<()> {
        if self.total() > MAX_DIFF_ORDER as u16 {
            return Err(KernelError::UnsupportedDerivative {
                x0: self.x0,
                x1: self.x1,
            });
        }
        Ok(())
    }
}

impl From<(u8, u8)> for DiffOrder {
    fn from((x0, x1): (u8, u8)) -> Self {
        DiffOrder::new(x0, x1)
    }
}

impl Phs7RbfKernel {
    /// Evaluates a partial derivative of the kernel given the coordinate
    /// offsets `dx = x0 - c0` and `dy = x1 - c1`.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::UnsupportedDerivative`] when the total order
    /// of `diff` exceeds two.
    pub fn eval_diff(&self, dx: f64, dy: f64, diff: DiffOrder) -> Result<f64> {
        diff.check()?;

        let r2 = dx * dx + dy * dy;
        if diff == DiffOrder::VALUE {
            return Ok(self.eval_r2(r2));
        }

        let r = r2.sqrt();
        if r <= 0.0 {
            return Ok(0.0);
        }

        let e = self.eps7();
        let r3 = r2 * r;
        let r5 = r3 * r2;

        let value = match (diff.x0, diff.x1) {
            (1, 0) => 7.0 * e * r5 * dx,
            (0, 1) => 7.0 * e * r5 * dy,
            (2, 0) => 7.0 * e * (r5 + 5.0 * r3 * dx * dx),
            (1, 1) => 35.0 * e * r3 * dx * dy,
            (0, 2) => 7.0 * e * (r5 + 5.0 * r3 * dy * dy),
            (x0, x1) => return Err(KernelError::UnsupportedDerivative { x0, x1 }),
        };

        Ok(value)
    }

    /// Evaluates the Laplacian `d2/dx0^2 + d2/dx1^2 = 49 eps^7 r^5`.
    #[inline]
    pub fn laplacian(&self, dx: f64, dy: f64) -> f64 {
        let r2 = dx * dx + dy * dy;
        let r = r2.sqrt();
        if r <= 0.0 {
            return 0.0;
        }
        49.0 * self.eps7() * r2 * r2 * r
    }
}

/// Evaluates the partial derivative `diff` of the order-7 polyharmonic
/// kernel at `(x0, x1)` for the center `(c0, c1)`.
///
/// # Examples
///
/// ```
/// use polyharmonic_rbf::{DiffOrder, evaluate_rbf_kernel_diff};
///
/// // d/dx0 of r^7 at (1, 0) is 7 r^5 dx = 7
/// let v = evaluate_rbf_kernel_diff(1.0, 0.0, 0.0, 0.0, 1.0, DiffOrder::D_X0).unwrap();
/// assert_eq!(v, 7.0);
///
/// assert!(evaluate_rbf_kernel_diff(1.0, 0.0, 0.0, 0.0, 1.0, DiffOrder::new(2, 1)).is_err());
/// ```
#[inline]
pub fn evaluate_rbf_kernel_diff(
    x0: f64,
    x1: f64,
    c0: f64,
    c1: f64,
    eps: f64,
    diff: DiffOrder,
) -> Result<f64> {
    Phs7RbfKernel::new(eps).eval_diff(x0 - c0, x1 - c1, diff)
}
