// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequential batch processing and FinOps savings aggregation.
//!
//! Each item is classified by length, priced against its worker's model, and
//! compared to an all-expensive baseline. The batch fails on the first
//! invalid item: silently dropping cost-relevant items would corrupt the
//! savings report.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use modelgate_config::{BatchConfig, ModelgateConfig};
use modelgate_core::{ModelgateError, TokenUsage};
use modelgate_cost::{CostEstimate, CostEstimator, estimate_tokens};

use crate::classifier::{ItemClass, LengthClassifier};

/// One processed batch item, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    /// Zero-based position in the input sequence.
    pub index: usize,
    /// Character length of the item.
    pub length: usize,
    /// Length classification.
    pub class: ItemClass,
    /// Cost estimate against the worker's model.
    pub estimate: CostEstimate,
}

/// The aggregate FinOps report for one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Per-item estimates, input order preserved.
    pub items: Vec<BatchItem>,
    /// Sum of per-item costs.
    pub total_cost_usd: f64,
    /// Hypothetical cost had every item used the expensive worker's model.
    pub baseline_cost_usd: f64,
    /// `baseline - total`.
    pub savings_usd: f64,
    /// Savings as a percentage of the baseline; 0.0 when the baseline is zero.
    pub savings_percent: f64,
}

/// Sequential batch processor over an immutable policy.
#[derive(Debug)]
pub struct BatchProcessor {
    config: BatchConfig,
    classifier: LengthClassifier,
    estimator: CostEstimator,
}

impl BatchProcessor {
    /// Create a processor from a batch section and a cost estimator.
    ///
    /// Fails with [`ModelgateError::PolicyValidation`] if the simple worker
    /// has no length threshold (validation normally catches this at load).
    pub fn new(config: BatchConfig, estimator: CostEstimator) -> Result<Self, ModelgateError> {
        let threshold = config.simple.max_len_threshold.ok_or_else(|| {
            ModelgateError::PolicyValidation(
                "batch.simple.max_len_threshold is required".to_string(),
            )
        })?;
        Ok(Self {
            config,
            classifier: LengthClassifier::new(threshold),
            estimator,
        })
    }

    /// Create a processor from a loaded policy document.
    pub fn from_config(config: &ModelgateConfig) -> Result<Self, ModelgateError> {
        Self::new(config.batch.clone(), CostEstimator::from_config(config))
    }

    /// Process a batch of text items into a savings report.
    ///
    /// Items are iterated strictly in input order with no reordering. The
    /// whole batch fails on the first item whose model has no pricing entry;
    /// there is no skip-and-continue.
    pub fn process<I, S>(&self, items: I) -> Result<BatchReport, ModelgateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report_items = Vec::new();
        let mut total_cost_usd = 0.0;
        let mut baseline_cost_usd = 0.0;

        for (index, item) in items.into_iter().enumerate() {
            let text = item.as_ref();
            let length = text.chars().count();
            let class = self.classifier.classify(text);
            let worker = match class {
                ItemClass::Simple => &self.config.simple,
                ItemClass::Complex => &self.config.complex,
            };

            let usage = self.usage_for(text);
            let estimate = self.estimator.estimate(&worker.model, usage)?;
            let baseline = self.estimator.estimate(&self.config.complex.model, usage)?;

            debug!(
                index,
                length,
                class = %class,
                model = worker.model.as_str(),
                cost_usd = estimate.cost_usd,
                "batch item priced"
            );

            total_cost_usd += estimate.cost_usd;
            baseline_cost_usd += baseline.cost_usd;
            report_items.push(BatchItem {
                index,
                length,
                class,
                estimate,
            });
        }

        let savings_usd = baseline_cost_usd - total_cost_usd;
        let savings_percent = if baseline_cost_usd > 0.0 {
            savings_usd / baseline_cost_usd * 100.0
        } else {
            0.0
        };

        info!(
            items = report_items.len(),
            total_cost_usd,
            baseline_cost_usd,
            savings_usd,
            "batch processed"
        );

        Ok(BatchReport {
            items: report_items,
            total_cost_usd,
            baseline_cost_usd,
            savings_usd,
            savings_percent,
        })
    }

    /// Token usage for one item: input from the length approximation, output
    /// from the configured `output_token_ratio`
    /// (`output = ceil(input * ratio)`, 0 by default).
    fn usage_for(&self, text: &str) -> TokenUsage {
        let input_tokens = estimate_tokens(text);
        let output_tokens =
            (input_tokens as f64 * self.config.output_token_ratio).ceil() as u32;
        TokenUsage {
            input_tokens,
            output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgate_config::{ModelPricing, WorkerConfig};
    use modelgate_cost::PricingTable;
    use std::collections::BTreeMap;

    const PRO: &str = "gemini-1.5-pro-001";
    const FLASH: &str = "gemini-1.5-flash-001";

    fn estimator() -> CostEstimator {
        let mut models = BTreeMap::new();
        models.insert(
            PRO.to_string(),
            ModelPricing {
                input_per_1k: 0.00125,
                output_per_1k: 0.005,
            },
        );
        models.insert(
            FLASH.to_string(),
            ModelPricing {
                input_per_1k: 0.000075,
                output_per_1k: 0.0003,
            },
        );
        CostEstimator::new(PricingTable::new(models))
    }

    fn batch_config() -> BatchConfig {
        BatchConfig {
            simple: WorkerConfig {
                model: FLASH.to_string(),
                max_len_threshold: Some(300),
            },
            complex: WorkerConfig {
                model: PRO.to_string(),
                max_len_threshold: None,
            },
            output_token_ratio: 0.0,
        }
    }

    fn processor() -> BatchProcessor {
        BatchProcessor::new(batch_config(), estimator()).unwrap()
    }

    #[test]
    fn mixed_batch_routes_by_length_and_saves() {
        // Lengths [10, 10, 700] against threshold 300.
        let items = ["x".repeat(10), "y".repeat(10), "z".repeat(700)];
        let report = processor().process(&items).unwrap();

        assert_eq!(report.items.len(), 3);
        assert_eq!(report.items[0].class, ItemClass::Simple);
        assert_eq!(report.items[1].class, ItemClass::Simple);
        assert_eq!(report.items[2].class, ItemClass::Complex);
        assert!(report.savings_usd > 0.0);
        assert!(report.savings_percent > 0.0);
    }

    #[test]
    fn input_order_is_preserved() {
        let items = ["a".repeat(700), "b".repeat(10), "c".repeat(700)];
        let report = processor().process(&items).unwrap();
        let indices: Vec<usize> = report.items.iter().map(|i| i.index).collect();
        assert_eq!(indices, [0, 1, 2]);
        assert_eq!(report.items[1].class, ItemClass::Simple);
    }

    #[test]
    fn all_complex_batch_has_zero_savings() {
        // Every item maps to the baseline model, so savings must be exactly 0.
        let items = ["x".repeat(700), "y".repeat(500)];
        let report = processor().process(&items).unwrap();
        assert_eq!(report.savings_usd, 0.0);
        assert_eq!(report.savings_percent, 0.0);
        assert_eq!(report.total_cost_usd, report.baseline_cost_usd);
    }

    #[test]
    fn empty_batch_reports_zero_percent() {
        let report = processor().process(Vec::<String>::new()).unwrap();
        assert!(report.items.is_empty());
        assert_eq!(report.total_cost_usd, 0.0);
        assert_eq!(report.baseline_cost_usd, 0.0);
        assert_eq!(report.savings_percent, 0.0);
    }

    #[test]
    fn total_is_sum_of_item_costs() {
        let items = ["x".repeat(100), "y".repeat(400)];
        let report = processor().process(&items).unwrap();
        let summed: f64 = report.items.iter().map(|i| i.estimate.cost_usd).sum();
        assert!((report.total_cost_usd - summed).abs() < 1e-12);
    }

    #[test]
    fn unpriced_worker_model_fails_the_whole_batch() {
        let mut config = batch_config();
        config.simple.model = "unlisted-model".to_string();
        let processor = BatchProcessor::new(config, estimator()).unwrap();

        let long = "x".repeat(700);
        let err = processor.process(["short", long.as_str()]).unwrap_err();
        assert!(matches!(err, ModelgateError::ModelNotFound { .. }));
    }

    #[test]
    fn output_token_ratio_adds_output_cost() {
        let mut config = batch_config();
        config.output_token_ratio = 0.5;
        let with_output = BatchProcessor::new(config, estimator()).unwrap();

        let items = ["x".repeat(400)]; // 100 input tokens -> 50 output tokens
        let report = with_output.process(&items).unwrap();
        assert_eq!(report.items[0].estimate.input_tokens, 100);
        assert_eq!(report.items[0].estimate.output_tokens, 50);

        let baseline_report = processor().process(&items).unwrap();
        assert!(report.total_cost_usd > baseline_report.total_cost_usd);
    }

    #[test]
    fn missing_threshold_is_a_policy_error() {
        let mut config = batch_config();
        config.simple.max_len_threshold = None;
        let err = BatchProcessor::new(config, estimator()).unwrap_err();
        assert!(matches!(err, ModelgateError::PolicyValidation(_)));
    }

    #[test]
    fn report_serializes_items_in_order() {
        let items = ["x".repeat(10), "y".repeat(700)];
        let report = processor().process(&items).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let classes: Vec<&str> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["class"].as_str().unwrap())
            .collect();
        assert_eq!(classes, ["simple", "complex"]);
    }
}
