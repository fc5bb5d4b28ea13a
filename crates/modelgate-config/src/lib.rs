// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Policy document system for the Modelgate routing gateway.
//!
//! Provides TOML policy parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides, and diagnostic
//! error rendering with typo suggestions.
//!
//! The loaded document carries both halves of the policy: the per-department
//! routing entries and the per-model pricing table. It is loaded once at
//! process start and passed read-only to the router, estimator, and batch
//! processor.
//!
//! # Usage
//!
//! ```no_run
//! use modelgate_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("departments: {}", config.departments.len());
//! ```

#![allow(clippy::result_large_err)] // ModelgateError carries formatted messages only

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

use modelgate_core::ModelgateError;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    BatchConfig, DepartmentConfig, GatewayConfig, ModelPricing, ModelgateConfig,
    RoutingDefaults, Tier, WorkerConfig,
};

/// Load the policy document from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads the policy from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to miette diagnostics with typo suggestions
///
/// Returns either a valid `ModelgateConfig` or a list of diagnostic errors.
pub fn load_and_validate() -> Result<ModelgateConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load the policy document from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<ModelgateConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load and validate a policy document from an explicit file path.
///
/// This is the programmatic loader contract: a missing file is
/// [`ModelgateError::PolicyNotFound`] (unlike the XDG hierarchy, where absent
/// files silently fall through to defaults), and any parse or validation
/// failure collapses into a single [`ModelgateError::PolicyValidation`].
pub fn load_policy(path: &Path) -> Result<ModelgateConfig, ModelgateError> {
    if !path.exists() {
        return Err(ModelgateError::PolicyNotFound {
            path: path.display().to_string(),
        });
    }

    let config = loader::load_config_from_path(path)
        .map_err(|err| diagnostic::to_policy_error(&diagnostic::figment_to_config_errors(err)))?;
    validation::validate_config(&config).map_err(|errs| diagnostic::to_policy_error(&errs))?;
    Ok(config)
}
