// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vocabulary helper for AMF JSON-LD models.
//!
//! AMF models come in several serializations: fully expanded IRIs, compact
//! form with `@context` aliases, and identifiers wrapped in `amf://id`. The
//! [`Vocabulary`] trait hides those differences from consumers:
//!
//! - key resolution from a logical term to the key used by the loaded model,
//! - `@type` membership tests,
//! - scalar literal reads that unwrap array and `@value` wrapping.
//!
//! [`AmfContext`] is the default implementation, driven by the model's
//! `@context`. Every lookup tolerates absence and returns `None`/`false`
//! instead of failing.

use serde_json::Value;
use std::borrow::Cow;

mod context;
mod model;
pub mod ns;

pub use context::AmfContext;
pub use model::{declares, find_by_id, find_declared, model_root, shape_name, ModelError};

/// Read access to a model's vocabulary, independent of its compaction scheme.
pub trait Vocabulary {
    /// Resolve a full IRI to the key used by the loaded model.
    ///
    /// Returns the IRI unchanged when no alias applies.
    fn key<'a>(&self, iri: &'a str) -> Cow<'a, str>;

    /// Whether `node` lists `iri` in its `@type`.
    ///
    /// Both the resolved key and the expanded IRI are accepted, since a
    /// compact model may still carry expanded type names.
    fn has_type(&self, node: &Value, iri: &str) -> bool {
        let key = self.key(iri);
        ensure_array(node.get("@type"))
            .into_iter()
            .filter_map(Value::as_str)
            .any(|t| t == key || t == iri)
    }

    /// Scalar literal stored under `iri` on `node`.
    fn value(&self, node: &Value, iri: &str) -> Option<String> {
        let node = first(node)?;
        let key = self.key(iri);
        node.get(key.as_ref()).and_then(literal)
    }
}

impl<T: Vocabulary + ?Sized> Vocabulary for &T {
    fn key<'a>(&self, iri: &'a str) -> Cow<'a, str> {
        (**self).key(iri)
    }

    fn has_type(&self, node: &Value, iri: &str) -> bool {
        (**self).has_type(node, iri)
    }

    fn value(&self, node: &Value, iri: &str) -> Option<String> {
        (**self).value(node, iri)
    }
}

/// Normalize an optional JSON-LD value to a sequence.
///
/// Arrays yield their elements, any other value yields itself, absence and
/// `null` yield nothing.
pub fn ensure_array(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// First element of an array, or the value itself.
pub fn first(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        Value::Null => None,
        other => Some(other),
    }
}

/// Read a literal, unwrapping array and `@value` wrapping.
///
/// Numbers and booleans are rendered with their JSON text. Objects without
/// `@value` are not literals.
pub fn literal(value: &Value) -> Option<String> {
    match first(value)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => map.get("@value").and_then(literal),
        Value::Array(_) | Value::Null => None,
    }
}
