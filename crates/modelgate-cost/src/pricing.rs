// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pricing table lookup and cost calculation.
//!
//! Prices are USD per thousand tokens, input and output priced separately,
//! drawn from the `[pricing]` section of the policy document. An unlisted
//! model is an error, never a silent fallback: a FinOps report with guessed
//! prices would be worse than no report.

use std::collections::BTreeMap;

use modelgate_config::{ModelPricing, ModelgateConfig};
use modelgate_core::{ModelgateError, TokenUsage};

/// Immutable per-model pricing table, keyed by model id.
#[derive(Debug, Clone, Default)]
pub struct PricingTable {
    models: BTreeMap<String, ModelPricing>,
}

impl PricingTable {
    /// Build a pricing table from a model-to-pricing map.
    pub fn new(models: BTreeMap<String, ModelPricing>) -> Self {
        Self { models }
    }

    /// Build a pricing table from the `[pricing]` section of a loaded policy.
    pub fn from_config(config: &ModelgateConfig) -> Self {
        Self::new(config.pricing.clone())
    }

    /// Look up pricing for a model id.
    ///
    /// Returns [`ModelgateError::ModelNotFound`] for an unlisted model.
    pub fn get(&self, model: &str) -> Result<&ModelPricing, ModelgateError> {
        self.models.get(model).ok_or_else(|| {
            ModelgateError::ModelNotFound {
                model: model.to_string(),
            }
        })
    }

    /// Number of models with pricing entries.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Calculate cost in USD for a given token usage and pricing.
///
/// Formula: `(input/1000) * input_per_1k + (output/1000) * output_per_1k`,
/// computed in f64 with no rounding until presentation.
pub fn calculate_cost(usage: TokenUsage, pricing: &ModelPricing) -> f64 {
    let input = (usage.input_tokens as f64 / 1000.0) * pricing.input_per_1k;
    let output = (usage.output_tokens as f64 / 1000.0) * pricing.output_per_1k;
    input + output
}
