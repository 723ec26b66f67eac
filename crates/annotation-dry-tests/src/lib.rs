// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for the annotation crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`fixtures`] - AMF models (expanded and compact) with annotated types
//! - [`view`] - Recording implementation of the view port

pub mod config;
pub mod fixtures;
pub mod view;

// Re-export commonly used items at crate root for convenience
pub use config::InMemoryConfigStore;
pub use fixtures::{compact_model, declared_shape, full_model, model, Flavor, TYPE_NAMES};
pub use view::{RecordingView, ViewCall};
