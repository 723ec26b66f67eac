// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lookups over a whole model document (declarations, named shapes).

use crate::{ensure_array, ns, Vocabulary};
use serde_json::Value;
use thiserror::Error;

/// Error returned by model-level lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The model root is neither an object nor an array starting with one.
    #[error("model root is not a JSON-LD object")]
    NotAnObject,
    /// No declared shape matched the requested name or identifier.
    #[error("shape not found: {0}")]
    ShapeNotFound(String),
}

/// Root node of a model: the value itself, or the first element of an array.
pub fn model_root(model: &Value) -> Option<&Value> {
    let root = match model {
        Value::Array(items) => items.first()?,
        other => other,
    };
    root.is_object().then_some(root)
}

/// Shapes listed under `document#declares` on the model root.
pub fn declares<'m, V>(vocab: &V, model: &'m Value) -> Vec<&'m Value>
where
    V: Vocabulary + ?Sized,
{
    let Some(root) = model_root(model) else {
        return Vec::new();
    };
    let key = vocab.key(ns::aml::document::DECLARES);
    ensure_array(root.get(key.as_ref()))
}

/// Display name of a shape (`shacl#name`, falling back to `core#name`).
pub fn shape_name<V>(vocab: &V, shape: &Value) -> Option<String>
where
    V: Vocabulary + ?Sized,
{
    vocab
        .value(shape, ns::w3::shacl::NAME)
        .or_else(|| vocab.value(shape, ns::aml::core::NAME))
}

/// Declared shape whose name equals `name`.
pub fn find_declared<'m, V>(vocab: &V, model: &'m Value, name: &str) -> Result<&'m Value, ModelError>
where
    V: Vocabulary + ?Sized,
{
    if model_root(model).is_none() {
        return Err(ModelError::NotAnObject);
    }
    declares(vocab, model)
        .into_iter()
        .find(|shape| shape_name(vocab, shape).as_deref() == Some(name))
        .ok_or_else(|| ModelError::ShapeNotFound(name.to_owned()))
}

/// Declared or encoded node whose `@id` equals `id`.
pub fn find_by_id<'m, V>(vocab: &V, model: &'m Value, id: &str) -> Result<&'m Value, ModelError>
where
    V: Vocabulary + ?Sized,
{
    let root = model_root(model).ok_or(ModelError::NotAnObject)?;
    let encodes_key = vocab.key(ns::aml::document::ENCODES);
    declares(vocab, model)
        .into_iter()
        .chain(ensure_array(root.get(encodes_key.as_ref())))
        .find(|node| node.get("@id").and_then(Value::as_str) == Some(id))
        .ok_or_else(|| ModelError::ShapeNotFound(id.to_owned()))
}
