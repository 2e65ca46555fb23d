/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines constants for the order-7 polyharmonic spline kernel and its derivatives.
//
// Created on: 18 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

/// Polyharmonic order `k` in `phi(r) = (eps * r)^k`.
pub const PHS_ORDER: i32 = 7;

/// Half of [`PHS_ORDER`], the exponent applied to the squared distance.
pub const PHS_HALF_ORDER: f64 = 7.0 / 2.0;

/// Highest total derivative order with a closed form in [`crate::derivatives`].
pub const MAX_DIFF_ORDER: u8 = 2;
