/////////////////////////////////////////////////////////////////////////////////////////////
//
// Provides parameter and builder types for configuring the polyharmonic kernel.
//
// Created on: 18 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::error::{KernelError, Result};
use serde::{Deserialize, Serialize};

/// Shape parameter configuration for [`Phs7RbfKernel`](crate::kernels::Phs7RbfKernel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelParams {
    /// Shape parameter scaling the distance before it is raised to the
    /// seventh power. Larger values steepen the kernel.
    ///
    /// A negative value is allowed and simply flips the sign of the kernel.
    pub eps: f64,
}

impl Default for KernelParams {
    fn default() -> Self {
        KernelParams { eps: 1.0 }
    }
}

impl KernelParams {
    /// Begins building a [`KernelParams`] instance.
    pub fn builder() -> KernelParamsBuilder {
        KernelParamsBuilder { eps: 1.0 }
    }
}

/// Builder for [`KernelParams`] that provides sensible defaults.
#[derive(Debug, Clone, Copy)]
pub struct KernelParamsBuilder {
    eps: f64,
}

impl KernelParamsBuilder {
    /// Sets the `eps` parameter on the builder.
    pub fn eps(mut self, v: f64) -> Self {
        self.eps = v;
        self
    }

    /// Finalises the builder into a [`KernelParams`] value.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidParameter`] if `eps` is NaN or infinite.
    pub fn build(self) -> Result<KernelParams> {
        if !self.eps.is_finite() {
            return Err(KernelError::InvalidParameter {
                parameter: "eps",
                value: self.eps,
                reason: "shape parameter must be finite",
            });
        }

        if self.eps < 0.0 {
            log::warn!(
                "negative shape parameter eps = {}; kernel values will be sign-flipped",
                self.eps
            );
        }

        log::debug!("built polyharmonic kernel params: eps = {}", self.eps);

        Ok(KernelParams { eps: self.eps })
    }
}
