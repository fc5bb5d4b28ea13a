// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pricing and cost estimation for the Modelgate routing gateway.
//!
//! This crate provides:
//! - [`PricingTable`]: Per-model unit pricing from the policy document
//! - [`CostEstimator`]: Pure linear cost estimation from token counts
//! - [`estimate_tokens`]: The documented `ceil(chars / 4)` approximation

pub mod estimator;
pub mod pricing;

pub use estimator::{CostEstimate, CostEstimator, estimate_tokens};
pub use pricing::{PricingTable, calculate_cost};
