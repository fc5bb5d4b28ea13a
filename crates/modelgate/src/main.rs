// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modelgate - policy-driven LLM routing and cost estimation.
//!
//! This is the binary entry point. All routing and cost logic lives in the
//! library crates; the binary only loads the policy, initializes tracing,
//! and dispatches subcommands.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use modelgate_config::ModelgateConfig;

mod batch;
mod estimate;
mod route;

/// Modelgate - route LLM requests by policy and estimate their cost.
#[derive(Parser, Debug)]
#[command(name = "modelgate", version, about, long_about = None)]
struct Cli {
    /// Explicit policy file (defaults to the XDG hierarchy).
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route a department request to a model.
    Route {
        /// Department id from the policy document.
        #[arg(long)]
        department: String,
        /// Complexity score in [0.0, 1.0].
        #[arg(long)]
        complexity: f64,
        /// Optional request text; when given, a mocked generation runs and
        /// its estimated cost is reported.
        #[arg(long)]
        request: Option<String>,
    },
    /// Estimate the cost of a request from token counts.
    Estimate {
        /// Model id from the pricing table.
        #[arg(long)]
        model: String,
        /// Input token count.
        #[arg(long)]
        input_tokens: u32,
        /// Output token count.
        #[arg(long)]
        output_tokens: u32,
    },
    /// Process a batch of items and print the FinOps savings report.
    Batch {
        /// File with one item per line; stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the resolved, validated policy document.
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_policy_document(cli.policy.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    init_tracing(&config.gateway.log_level);

    let result = match cli.command {
        Commands::Route {
            department,
            complexity,
            request,
        } => route::run(&config, &department, complexity, request.as_deref()),
        Commands::Estimate {
            model,
            input_tokens,
            output_tokens,
        } => estimate::run(&config, &model, input_tokens, output_tokens),
        Commands::Batch { file } => batch::run(&config, file.as_deref()),
        Commands::Config => print_config(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("modelgate: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Load the policy either from an explicit path or the XDG hierarchy.
fn load_policy_document(
    path: Option<&std::path::Path>,
) -> Result<ModelgateConfig, ExitCode> {
    match path {
        Some(path) => modelgate_config::load_policy(path).map_err(|err| {
            eprintln!("modelgate: {err}");
            ExitCode::FAILURE
        }),
        None => modelgate_config::load_and_validate().map_err(|errors| {
            modelgate_config::render_errors(&errors);
            ExitCode::FAILURE
        }),
    }
}

/// Initialize tracing with env-filter; `RUST_LOG` overrides the policy level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the resolved configuration as TOML.
fn print_config(config: &ModelgateConfig) -> Result<(), modelgate_core::ModelgateError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| modelgate_core::ModelgateError::PolicyValidation(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_policy_document_loads() {
        let config = modelgate_config::load_and_validate_str("")
            .expect("default policy should be valid");
        assert_eq!(config.gateway.name, "modelgate");
    }

    #[test]
    fn explicit_missing_policy_is_reported() {
        let err = modelgate_config::load_policy(std::path::Path::new(
            "/nonexistent/modelgate.toml",
        ))
        .unwrap_err();
        assert!(err.to_string().contains("policy not found"));
    }
}
