// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Annotation extraction for AMF shapes.
//! Keeps UI/runtime adapters thin and framework-agnostic: views consume the
//! records and visibility flag produced here.

pub mod config;
pub mod document;
pub mod extract;
pub mod options;
pub mod record;

pub use document::{AnnotationDocument, ListenerId};
pub use extract::Extractor;
pub use options::{EmptyPolicy, ExtractOptions, NameSource, NameTerm};
pub use record::{AnnotationRecord, AnnotationValue, ValuePair};
