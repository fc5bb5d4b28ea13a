// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cost estimation from token counts and per-model unit pricing.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use modelgate_config::ModelgateConfig;
use modelgate_core::{ModelgateError, TokenUsage};

use crate::pricing::{PricingTable, calculate_cost};

/// Characters per token for the length-based approximation.
const CHARS_PER_TOKEN: usize = 4;

/// The immutable result of one cost estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Model the estimate was priced against.
    pub model: String,
    /// Number of input tokens.
    pub input_tokens: u32,
    /// Number of output tokens.
    pub output_tokens: u32,
    /// Estimated cost in USD, unrounded.
    pub cost_usd: f64,
}

/// Estimate token count from character length.
///
/// APPROXIMATION: assumes 1 token ~= 4 characters (`ceil(chars / 4)`), a
/// common rule of thumb for BPE-family models. This is not a tokenizer and
/// accuracy is not a goal; production accounting should use the provider's
/// token counts.
pub fn estimate_tokens(text: &str) -> u32 {
    text.chars().count().div_ceil(CHARS_PER_TOKEN) as u32
}

/// Pure cost estimator over an immutable pricing table.
#[derive(Debug, Clone)]
pub struct CostEstimator {
    pricing: PricingTable,
}

impl CostEstimator {
    /// Create an estimator over the given pricing table.
    pub fn new(pricing: PricingTable) -> Self {
        Self { pricing }
    }

    /// Create an estimator from the `[pricing]` section of a loaded policy.
    pub fn from_config(config: &ModelgateConfig) -> Self {
        Self::new(PricingTable::from_config(config))
    }

    /// Estimate the cost of serving one request.
    ///
    /// Returns [`ModelgateError::ModelNotFound`] if `model_id` has no pricing
    /// entry. Deterministic and side-effect free apart from tracing.
    pub fn estimate(
        &self,
        model_id: &str,
        usage: TokenUsage,
    ) -> Result<CostEstimate, ModelgateError> {
        debug!(
            model = model_id,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "estimating cost"
        );

        let pricing = self.pricing.get(model_id).inspect_err(|_| {
            warn!(model = model_id, "model not found in pricing table");
        })?;

        let cost_usd = calculate_cost(usage, pricing);
        Ok(CostEstimate {
            model: model_id.to_string(),
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
            cost_usd,
        })
    }

    /// Estimate the cost of a request given raw input/output text lengths,
    /// using the documented token approximation.
    pub fn estimate_from_text(
        &self,
        model_id: &str,
        input_text: &str,
        output_text: &str,
    ) -> Result<CostEstimate, ModelgateError> {
        let usage = TokenUsage {
            input_tokens: estimate_tokens(input_text),
            output_tokens: estimate_tokens(output_text),
        };
        self.estimate(model_id, usage)
    }

    /// Access the underlying pricing table.
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }
}
