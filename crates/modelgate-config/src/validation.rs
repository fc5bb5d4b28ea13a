// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for policy values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: tier-required fields, thresholds inside the unit interval,
//! and non-negative prices.

use crate::diagnostic::ConfigError;
use crate::model::{ModelgateConfig, Tier};

/// Validate a deserialized policy document for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ModelgateConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    for (department, entry) in &config.departments {
        match entry.tier {
            Tier::Platinum | Tier::Budget => {
                let missing = entry
                    .model
                    .as_deref()
                    .is_none_or(|m| m.trim().is_empty());
                if missing {
                    errors.push(ConfigError::Validation {
                        message: format!(
                            "departments.{department} (tier {}) requires a fixed `model`",
                            entry.tier
                        ),
                    });
                }
            }
            Tier::Standard => match entry.complexity_threshold {
                None => errors.push(ConfigError::Validation {
                    message: format!(
                        "departments.{department} (tier standard) requires `complexity_threshold`"
                    ),
                }),
                Some(t) if !(0.0..=1.0).contains(&t) => errors.push(ConfigError::Validation {
                    message: format!(
                        "departments.{department}.complexity_threshold must be within [0.0, 1.0], got {t}"
                    ),
                }),
                Some(_) => {}
            },
        }
    }

    for (model, pricing) in &config.pricing {
        if pricing.input_per_1k < 0.0 {
            errors.push(ConfigError::Validation {
                message: format!(
                    "pricing.{model}.input_per_1k must be non-negative, got {}",
                    pricing.input_per_1k
                ),
            });
        }
        if pricing.output_per_1k < 0.0 {
            errors.push(ConfigError::Validation {
                message: format!(
                    "pricing.{model}.output_per_1k must be non-negative, got {}",
                    pricing.output_per_1k
                ),
            });
        }
    }

    if config.routing.cheap_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "routing.cheap_model must not be empty".to_string(),
        });
    }
    if config.routing.expensive_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "routing.expensive_model must not be empty".to_string(),
        });
    }

    if config.batch.simple.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "batch.simple.model must not be empty".to_string(),
        });
    }
    if config.batch.complex.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "batch.complex.model must not be empty".to_string(),
        });
    }
    if config.batch.simple.max_len_threshold.is_none() {
        errors.push(ConfigError::Validation {
            message: "batch.simple.max_len_threshold is required".to_string(),
        });
    }
    if config.batch.output_token_ratio < 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "batch.output_token_ratio must be non-negative, got {}",
                config.batch.output_token_ratio
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DepartmentConfig, ModelPricing};

    fn config_with_department(entry: DepartmentConfig) -> ModelgateConfig {
        let mut config = ModelgateConfig::default();
        config.departments.insert("dept".to_string(), entry);
        config
    }

    #[test]
    fn default_config_validates() {
        let config = ModelgateConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn platinum_without_model_fails() {
        let config = config_with_department(DepartmentConfig {
            tier: Tier::Platinum,
            model: None,
            complexity_threshold: None,
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("fixed `model`"))
        ));
    }

    #[test]
    fn budget_without_model_fails() {
        let config = config_with_department(DepartmentConfig {
            tier: Tier::Budget,
            model: Some("  ".to_string()),
            complexity_threshold: None,
        });
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn standard_without_threshold_fails() {
        let config = config_with_department(DepartmentConfig {
            tier: Tier::Standard,
            model: None,
            complexity_threshold: None,
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("complexity_threshold"))
        ));
    }

    #[test]
    fn standard_threshold_out_of_range_fails() {
        for bad in [-0.1, 1.1] {
            let config = config_with_department(DepartmentConfig {
                tier: Tier::Standard,
                model: None,
                complexity_threshold: Some(bad),
            });
            assert!(validate_config(&config).is_err(), "threshold {bad} accepted");
        }
    }

    #[test]
    fn standard_boundary_thresholds_pass() {
        for good in [0.0, 0.5, 1.0] {
            let config = config_with_department(DepartmentConfig {
                tier: Tier::Standard,
                model: None,
                complexity_threshold: Some(good),
            });
            assert!(validate_config(&config).is_ok(), "threshold {good} rejected");
        }
    }

    #[test]
    fn negative_price_fails() {
        let mut config = ModelgateConfig::default();
        config.pricing.insert(
            "gemini-1.5-pro-001".to_string(),
            ModelPricing {
                input_per_1k: -0.001,
                output_per_1k: 0.005,
            },
        );
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("input_per_1k"))
        ));
    }

    #[test]
    fn negative_output_ratio_fails() {
        let mut config = ModelgateConfig::default();
        config.batch.output_token_ratio = -0.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = config_with_department(DepartmentConfig {
            tier: Tier::Standard,
            model: None,
            complexity_threshold: Some(2.0),
        });
        config.pricing.insert(
            "m".to_string(),
            ModelPricing {
                input_per_1k: -1.0,
                output_per_1k: -1.0,
            },
        );
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
