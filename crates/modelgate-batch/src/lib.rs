// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Batch classification and FinOps savings reporting for Modelgate.
//!
//! This crate provides:
//! - [`LengthClassifier`]: simple/complex classification by character length
//! - [`BatchProcessor`]: sequential per-item pricing with an all-expensive
//!   baseline and an aggregate savings report
//!
//! Batches are plain in-memory iterations over immutable configuration;
//! there is no scheduling, reordering, or partial-failure recovery.

pub mod classifier;
pub mod processor;

pub use classifier::{ItemClass, LengthClassifier};
pub use processor::{BatchItem, BatchProcessor, BatchReport};
