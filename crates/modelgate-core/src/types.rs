// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Modelgate workspace.

use serde::{Deserialize, Serialize};

/// Token counts for a single request, split by direction.
///
/// Counts are `u32`, so negative token counts are unrepresentable by
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of input (prompt) tokens.
    pub input_tokens: u32,
    /// Number of output (completion) tokens.
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Total tokens in both directions.
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}
