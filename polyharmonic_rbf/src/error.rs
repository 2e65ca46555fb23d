/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the error type returned by fallible kernel operations.
//
// Created on: 18 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use std::fmt;

/// Errors produced when configuring or broadcasting the kernel.
///
/// Scalar kernel evaluation itself never fails; these only arise from
/// parameter validation, unsupported derivative requests and shape checks.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A kernel parameter was outside its accepted domain.
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The requested partial derivative has no closed form in this crate.
    UnsupportedDerivative { x0: u8, x1: u8 },

    /// A broadcast argument had neither length 1 nor the common length.
    LengthMismatch {
        argument: &'static str,
        expected: usize,
        got: usize,
    },

    /// Paired point arrays did not share the same shape.
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "invalid kernel parameter `{}` = {}: {}", parameter, value, reason),
            KernelError::UnsupportedDerivative { x0, x1 } => write!(
                f,
                "unsupported derivative order ({}, {}): total order must not exceed {}",
                x0,
                x1,
                crate::constants::MAX_DIFF_ORDER
            ),
            KernelError::LengthMismatch {
                argument,
                expected,
                got,
            } => write!(
                f,
                "cannot broadcast argument `{}` of length {} to length {}",
                argument, got, expected
            ),
            KernelError::ShapeMismatch { expected, got } => write!(
                f,
                "paired points have shape {}x{}, expected {}x{}",
                got.0, got.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for KernelError {}

/// Result alias for fallible kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;
