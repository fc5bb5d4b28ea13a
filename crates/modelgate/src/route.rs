// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `modelgate route` subcommand.

use modelgate_config::ModelgateConfig;
use modelgate_core::{Generator, MockGenerator, ModelgateError};
use modelgate_cost::CostEstimator;
use modelgate_router::ModelRouter;

/// Route one request and, when request text is given, run the mocked
/// generation collaborator and report the estimated cost.
pub fn run(
    config: &ModelgateConfig,
    department: &str,
    complexity: f64,
    request: Option<&str>,
) -> Result<(), ModelgateError> {
    let router = ModelRouter::from_config(config);
    let decision = router.route(department, complexity)?;

    println!("department: {}", decision.department);
    println!("tier:       {}", decision.tier);
    println!("model:      {}", decision.selected_model);
    println!("rationale:  {}", decision.rationale);

    if let Some(request) = request {
        let generation = MockGenerator.generate(request, &decision.selected_model)?;
        let estimator = CostEstimator::from_config(config);
        let estimate = estimator.estimate_from_text(
            &decision.selected_model,
            request,
            &generation.output_text,
        )?;
        println!(
            "cost:       ${:.6} ({} input + {} output tokens, estimated)",
            estimate.cost_usd, estimate.input_tokens, estimate.output_tokens
        );
    }

    Ok(())
}
