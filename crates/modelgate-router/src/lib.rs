// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Policy-driven model routing for the Modelgate gateway.
//!
//! This crate provides [`ModelRouter`]: tier-based model selection over an
//! immutable routing policy. Platinum and budget departments resolve to their
//! fixed models; standard departments decide between the configured cheap and
//! expensive models by complexity threshold.
//!
//! The router intercepts requests before any LLM call and is pure: same
//! policy, same inputs, same decision.

pub mod router;

pub use router::{ModelRouter, RoutingDecision};
