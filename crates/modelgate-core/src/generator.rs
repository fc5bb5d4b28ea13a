// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation collaborator seam.
//!
//! The actual LLM inference call is external to Modelgate. Routing and cost
//! estimation only need the seam: a trait that a real network client and a
//! test double implement interchangeably. The core never inspects
//! `output_text` content.

use crate::error::ModelgateError;

/// A generation response from an LLM collaborator.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The generated text. Opaque to routing and cost logic.
    pub output_text: String,
    /// The model that produced the response.
    pub model: String,
}

/// Injectable generation capability.
///
/// Synchronous by design: the Modelgate core has no suspension points, and
/// the demo path only needs a deterministic stand-in.
pub trait Generator {
    /// Generate a completion for `prompt` using `model_id`.
    fn generate(&self, prompt: &str, model_id: &str) -> Result<Generation, ModelgateError>;
}

/// Deterministic test double for the generation collaborator.
///
/// Returns a fixed marker response without any network call, mirroring how
/// the demo environment simulates inference.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator;

impl Generator for MockGenerator {
    fn generate(&self, _prompt: &str, model_id: &str) -> Result<Generation, ModelgateError> {
        Ok(Generation {
            output_text: "ANALYSIS_DONE".to_string(),
            model: model_id.to_string(),
        })
    }
}
