// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Modelgate routing gateway.
//!
//! This crate provides the shared error type, token accounting types, and the
//! generation-collaborator trait used throughout the Modelgate workspace.

pub mod error;
pub mod generator;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ModelgateError;
pub use generator::{Generation, Generator, MockGenerator};
pub use types::TokenUsage;
