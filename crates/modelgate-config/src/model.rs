// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Policy document model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.
//!
//! The document is loaded once at process start, validated, and used
//! read-only for the process lifetime. No component mutates it; the loaded
//! policy is passed explicitly to each component.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level Modelgate policy document.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. Sections default to sensible values; `departments`
/// and `pricing` default to empty tables (routing and estimation then fail
/// per-request with not-found errors rather than at load time).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelgateConfig {
    /// Gateway identity and logging settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Per-department routing policy entries, keyed by department id.
    #[serde(default)]
    pub departments: BTreeMap<String, DepartmentConfig>,

    /// Per-model unit pricing, keyed by model id.
    #[serde(default)]
    pub pricing: BTreeMap<String, ModelPricing>,

    /// Model pair used by standard-tier threshold decisions.
    #[serde(default)]
    pub routing: RoutingDefaults,

    /// Batch classification and aggregation settings.
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Gateway identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Display name of the gateway.
    #[serde(default = "default_gateway_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            name: default_gateway_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_gateway_name() -> String {
    "modelgate".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Department tier controlling how the router resolves a model.
///
/// Platinum and budget tiers always resolve to the entry's fixed model;
/// the standard tier decides between the routing defaults by complexity
/// threshold. Unknown tier names are rejected at deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    /// Always the entry's fixed (higher-quality) model, complexity ignored.
    Platinum,
    /// Threshold decision between the routing defaults.
    Standard,
    /// Always the entry's fixed (cheaper) model, complexity ignored.
    Budget,
}

/// A single department's routing policy entry.
///
/// Exactly one of `model` or `complexity_threshold` is meaningful per tier:
/// platinum/budget require `model`, standard requires `complexity_threshold`.
/// Validation enforces this after deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DepartmentConfig {
    /// Department tier.
    pub tier: Tier,

    /// Fixed model for platinum/budget tiers.
    #[serde(default)]
    pub model: Option<String>,

    /// Complexity threshold in `[0.0, 1.0]` for the standard tier. Scores at
    /// or above the threshold route to the expensive model.
    #[serde(default)]
    pub complexity_threshold: Option<f64>,
}

/// Per-model unit pricing in USD per thousand tokens.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelPricing {
    /// Price per 1k input tokens.
    pub input_per_1k: f64,
    /// Price per 1k output tokens.
    pub output_per_1k: f64,
}

/// Model pair a standard-tier threshold decision selects between.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingDefaults {
    /// Model for scores below the department threshold.
    #[serde(default = "default_cheap_model")]
    pub cheap_model: String,

    /// Model for scores at or above the department threshold.
    #[serde(default = "default_expensive_model")]
    pub expensive_model: String,
}

impl Default for RoutingDefaults {
    fn default() -> Self {
        Self {
            cheap_model: default_cheap_model(),
            expensive_model: default_expensive_model(),
        }
    }
}

fn default_cheap_model() -> String {
    "gemini-1.5-flash-001".to_string()
}

fn default_expensive_model() -> String {
    "gemini-1.5-pro-001".to_string()
}

/// Batch classification and aggregation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Worker handling items below the length threshold.
    #[serde(default = "default_simple_worker")]
    pub simple: WorkerConfig,

    /// Worker handling items at or above the length threshold. Also defines
    /// the all-expensive baseline for the savings report.
    #[serde(default = "default_complex_worker")]
    pub complex: WorkerConfig,

    /// Estimated output tokens per item as a fraction of input tokens
    /// (`output = ceil(input * ratio)`). The default of 0.0 prices input
    /// only, matching the classic FinOps report this system descends from.
    #[serde(default)]
    pub output_token_ratio: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            simple: default_simple_worker(),
            complex: default_complex_worker(),
            output_token_ratio: 0.0,
        }
    }
}

/// A batch worker: a model plus an optional length threshold.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WorkerConfig {
    /// Model id the worker submits to.
    pub model: String,

    /// Character-length threshold below which an item counts as simple.
    /// Meaningful on the simple worker only.
    #[serde(default)]
    pub max_len_threshold: Option<usize>,
}

fn default_simple_worker() -> WorkerConfig {
    WorkerConfig {
        model: default_cheap_model(),
        max_len_threshold: Some(300),
    }
}

fn default_complex_worker() -> WorkerConfig {
    WorkerConfig {
        model: default_expensive_model(),
        max_len_threshold: None,
    }
}
