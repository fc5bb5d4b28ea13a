// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tier-based model routing.
//!
//! The router resolves a department id and complexity score to a model id
//! using the loaded policy, evaluated in a fixed order: platinum and budget
//! tiers always return their fixed model; the standard tier compares the
//! score against the department threshold (inclusive on the upper side).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use modelgate_config::{DepartmentConfig, ModelgateConfig, RoutingDefaults, Tier};
use modelgate_core::ModelgateError;

/// The immutable result of one routing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Department the request was routed for.
    pub department: String,
    /// Tier of the department's policy entry.
    pub tier: Tier,
    /// Model the policy resolved to.
    pub selected_model: String,
    /// Human-readable reason for the decision.
    pub rationale: String,
}

/// Policy-driven model router.
///
/// Holds the per-department entries and the cheap/expensive model pair used
/// by standard-tier threshold decisions. Deterministic given identical
/// inputs; no side effects beyond tracing.
pub struct ModelRouter {
    departments: BTreeMap<String, DepartmentConfig>,
    defaults: RoutingDefaults,
}

impl ModelRouter {
    /// Create a router from department entries and routing defaults.
    pub fn new(
        departments: BTreeMap<String, DepartmentConfig>,
        defaults: RoutingDefaults,
    ) -> Self {
        Self {
            departments,
            defaults,
        }
    }

    /// Create a router from a loaded policy document.
    pub fn from_config(config: &ModelgateConfig) -> Self {
        Self::new(config.departments.clone(), config.routing.clone())
    }

    /// Route a request to a model.
    ///
    /// Fails with [`ModelgateError::DepartmentNotFound`] for an unknown
    /// department and [`ModelgateError::InvalidComplexity`] for a score
    /// outside `[0.0, 1.0]` (out-of-range scores are rejected, not clamped).
    pub fn route(
        &self,
        department: &str,
        complexity_score: f64,
    ) -> Result<RoutingDecision, ModelgateError> {
        debug!(department, complexity_score, "routing request");

        let entry = self.departments.get(department).ok_or_else(|| {
            warn!(department, "department not found in policy");
            ModelgateError::DepartmentNotFound {
                department: department.to_string(),
            }
        })?;

        // NaN fails the range check and is rejected with the score it came in as.
        if !(0.0..=1.0).contains(&complexity_score) {
            warn!(department, complexity_score, "complexity score out of range");
            return Err(ModelgateError::InvalidComplexity {
                score: complexity_score,
            });
        }

        let decision = match entry.tier {
            Tier::Platinum => self.fixed_model_decision(department, entry, "maximum quality")?,
            Tier::Budget => self.fixed_model_decision(department, entry, "cost optimization")?,
            Tier::Standard => {
                let threshold = entry.complexity_threshold.ok_or_else(|| {
                    ModelgateError::PolicyValidation(format!(
                        "department `{department}` (tier standard) has no complexity_threshold"
                    ))
                })?;

                // Inclusive on the upper side: score == threshold routes expensive.
                let (selected_model, rationale) = if complexity_score >= threshold {
                    (
                        self.defaults.expensive_model.clone(),
                        format!("complexity {complexity_score} >= threshold {threshold}"),
                    )
                } else {
                    (
                        self.defaults.cheap_model.clone(),
                        format!("complexity {complexity_score} < threshold {threshold}"),
                    )
                };

                RoutingDecision {
                    department: department.to_string(),
                    tier: Tier::Standard,
                    selected_model,
                    rationale,
                }
            }
        };

        info!(
            department,
            tier = %decision.tier,
            model = decision.selected_model.as_str(),
            "routing decision"
        );
        Ok(decision)
    }

    /// Build the decision for a fixed-model tier (platinum/budget).
    ///
    /// Policy validation guarantees a model is present; a missing one here
    /// means the router was constructed from an unvalidated document.
    fn fixed_model_decision(
        &self,
        department: &str,
        entry: &DepartmentConfig,
        why: &str,
    ) -> Result<RoutingDecision, ModelgateError> {
        let model = entry.model.as_deref().ok_or_else(|| {
            ModelgateError::PolicyValidation(format!(
                "department `{department}` (tier {}) has no fixed model",
                entry.tier
            ))
        })?;

        Ok(RoutingDecision {
            department: department.to_string(),
            tier: entry.tier,
            selected_model: model.to_string(),
            rationale: format!("tier {} always uses {model} ({why})", entry.tier),
        })
    }
}
