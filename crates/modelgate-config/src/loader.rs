// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Policy document loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./modelgate.toml` > `~/.config/modelgate/modelgate.toml`
//! > `/etc/modelgate/modelgate.toml` with environment variable overrides via
//! `MODELGATE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ModelgateConfig;

/// Load the policy document from the standard XDG hierarchy with env var
/// overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/modelgate/modelgate.toml` (system-wide)
/// 3. `~/.config/modelgate/modelgate.toml` (user XDG config)
/// 4. `./modelgate.toml` (local directory)
/// 5. `MODELGATE_*` environment variables
pub fn load_config() -> Result<ModelgateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ModelgateConfig::default()))
        .merge(Toml::file("/etc/modelgate/modelgate.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("modelgate/modelgate.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("modelgate.toml"))
        .merge(env_provider())
        .extract()
}

/// Load the policy document from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit policy specification.
pub fn load_config_from_str(toml_content: &str) -> Result<ModelgateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ModelgateConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load the policy document from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ModelgateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ModelgateConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `MODELGATE_BATCH_OUTPUT_TOKEN_RATIO`
/// must map to `batch.output_token_ratio`, not `batch.output.token.ratio`.
fn env_provider() -> Env {
    Env::prefixed("MODELGATE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: MODELGATE_GATEWAY_LOG_LEVEL -> "gateway_log_level"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("gateway_", "gateway.", 1)
            .replacen("routing_", "routing.", 1)
            .replacen("batch_", "batch.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.gateway.name, "modelgate");
        assert!(config.departments.is_empty());
        assert_eq!(config.routing.expensive_model, "gemini-1.5-pro-001");
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[routing]
cheap_model = "flash-lite"

[batch]
output_token_ratio = 0.25
"#,
        )
        .unwrap();
        assert_eq!(config.routing.cheap_model, "flash-lite");
        // Unset keys keep their defaults.
        assert_eq!(config.routing.expensive_model, "gemini-1.5-pro-001");
        assert!((config.batch.output_token_ratio - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modelgate.toml");
        std::fs::write(
            &path,
            r#"
[gateway]
name = "gateway-under-test"

[departments.legal_dept]
tier = "platinum"
model = "gemini-1.5-pro-001"
"#,
        )
        .unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.gateway.name, "gateway-under-test");
        assert_eq!(config.departments.len(), 1);
    }

    #[test]
    fn missing_file_yields_defaults() {
        // Figment treats a missing optional file as an empty provider.
        let config =
            load_config_from_path(Path::new("/nonexistent/modelgate.toml")).unwrap();
        assert_eq!(config.gateway.name, "modelgate");
    }
}
