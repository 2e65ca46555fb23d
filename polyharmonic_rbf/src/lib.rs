/////////////////////////////////////////////////////////////////////////////////////////////
//
// Re-exports the polyharmonic kernel, its derivatives, broadcast helpers and parameters.
//
// Created on: 18 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Order-7 polyharmonic spline RBF kernel
//!
//! Evaluates the radial basis function `phi(r) = (eps * r)^7` at a point
//! `(x0, x1)` against a center `(c0, c1)`, where `r` is the Euclidean
//! distance between the two and `eps` is the shape parameter.
//!
//! # Features
//! - A total, allocation-free scalar evaluator, [`evaluate_rbf_kernel`]
//! - Closed-form partial derivatives up to second order, [`evaluate_rbf_kernel_diff`]
//! - Elementwise evaluation with length-1 broadcasting over slices
//! - A [`KernelFunction`] implementation over
//!   [`faer`](https://docs.rs/faer/latest/faer/) row views
//!
//! # Examples
//!
//! ```
//! use polyharmonic_rbf::{KernelParams, KernelFromParams, KernelFunction, kernels::Phs7RbfKernel};
//! use faer::mat;
//!
//! let params = KernelParams::builder().eps(0.5).build().unwrap();
//! let kernel = Phs7RbfKernel::from_params(&params);
//!
//! let points = mat![
//!     [1.0, 1.0],
//!     [0.0, 0.0f64],
//! ];
//!
//! let v = kernel.evaluate(points.row(0), points.row(1));
//! assert!((v - 0.08838834764831845).abs() < 1e-15);
//! ```
mod constants;
mod derivatives;
mod error;
mod kernel_helpers;
mod rbf_kernels;
mod traits;
mod ufuncs;
mod utils;

/// Implemented kernels.
pub mod kernels {
    pub use super::rbf_kernels::*;
}

pub use {
    constants::{MAX_DIFF_ORDER, PHS_ORDER},
    derivatives::{DiffOrder, evaluate_rbf_kernel_diff},
    error::{KernelError, Result},
    kernel_helpers::{KernelParams, KernelParamsBuilder},
    rbf_kernels::evaluate_rbf_kernel,
    traits::{KernelFromParams, KernelFunction},
    ufuncs::{
        evaluate_paired_rows, evaluate_rbf_kernel_broadcast, evaluate_rbf_kernel_diff_broadcast,
    },
    utils::{distance_sq_2d, get_distance, get_distance_sq},
};
