// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `modelgate estimate` subcommand.

use modelgate_config::ModelgateConfig;
use modelgate_core::{ModelgateError, TokenUsage};
use modelgate_cost::CostEstimator;

/// Estimate the cost of one request from explicit token counts.
pub fn run(
    config: &ModelgateConfig,
    model: &str,
    input_tokens: u32,
    output_tokens: u32,
) -> Result<(), ModelgateError> {
    let estimator = CostEstimator::from_config(config);
    let estimate = estimator.estimate(
        model,
        TokenUsage {
            input_tokens,
            output_tokens,
        },
    )?;

    println!("model:         {}", estimate.model);
    println!("input tokens:  {}", estimate.input_tokens);
    println!("output tokens: {}", estimate.output_tokens);
    println!("cost:          ${:.6}", estimate.cost_usd);
    Ok(())
}
