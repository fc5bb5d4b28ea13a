// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `modelgate batch` subcommand.

use std::io::Read;
use std::path::Path;

use modelgate_batch::BatchProcessor;
use modelgate_config::ModelgateConfig;
use modelgate_core::ModelgateError;

/// Process newline-delimited items from a file (or stdin) and print the
/// per-item table plus the FinOps savings summary.
pub fn run(config: &ModelgateConfig, file: Option<&Path>) -> Result<(), ModelgateError> {
    let input = read_items(file)?;
    let items: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();

    let processor = BatchProcessor::from_config(config)?;
    let report = processor.process(&items)?;

    println!("{:>5}  {:>7}  {:<8}  {:<24}  {:>12}", "item", "length", "class", "model", "cost ($)");
    for item in &report.items {
        println!(
            "{:>5}  {:>7}  {:<8}  {:<24}  {:>12.6}",
            item.index,
            item.length,
            item.class.to_string(),
            item.estimate.model,
            item.estimate.cost_usd
        );
    }

    println!();
    println!("total cost:          ${:.6}", report.total_cost_usd);
    println!("all-expensive cost:  ${:.6}", report.baseline_cost_usd);
    println!(
        "savings:             ${:.6} ({:.2}%)",
        report.savings_usd, report.savings_percent
    );
    Ok(())
}

/// Read batch items from the given file, or stdin when no file is given.
fn read_items(file: Option<&Path>) -> Result<String, ModelgateError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            ModelgateError::Internal(format!("failed to read {}: {e}", path.display()))
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| ModelgateError::Internal(format!("failed to read stdin: {e}")))?;
            Ok(buf)
        }
    }
}
