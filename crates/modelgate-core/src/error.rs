// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Modelgate routing gateway.

use thiserror::Error;

/// The primary error type used across Modelgate routing, pricing, and batch
/// operations.
///
/// All errors are raised at the point of detection and surfaced directly to
/// the caller. The core is a synchronous pure computation, so there are no
/// transient conditions to retry against.
#[derive(Debug, Error)]
pub enum ModelgateError {
    /// The requested policy document does not exist.
    #[error("policy not found: {path}")]
    PolicyNotFound { path: String },

    /// The policy document is structurally invalid (missing tier-required
    /// fields, negative prices, threshold outside the unit interval).
    #[error("policy validation failed: {0}")]
    PolicyValidation(String),

    /// The department key passed to the router is absent from the policy.
    #[error("department `{department}` not found in routing policy")]
    DepartmentNotFound { department: String },

    /// The model key passed to the cost estimator is absent from the pricing
    /// table.
    #[error("model `{model}` not found in pricing table")]
    ModelNotFound { model: String },

    /// A complexity score outside the closed unit interval. Out-of-range
    /// scores are rejected, never clamped.
    #[error("complexity score must be within [0.0, 1.0], got {score}")]
    InvalidComplexity { score: f64 },

    /// Generation collaborator failure (the collaborator itself is external;
    /// this variant exists so test doubles and real clients share a seam).
    #[error("generation error: {message}")]
    Generation { message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
