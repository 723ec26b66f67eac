// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `@context`-driven key resolution.

use crate::{model::model_root, Vocabulary};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Mutex;

/// [`Vocabulary`] backed by a model's JSON-LD `@context`.
///
/// A context is bound to the model it was built from. Resolved keys are
/// memoised for the lifetime of the context.
#[derive(Debug, Default)]
pub struct AmfContext {
    aliases: Vec<(String, String)>,
    cache: Mutex<HashMap<String, String>>,
}

impl AmfContext {
    /// Context for a fully expanded model: every IRI resolves to itself.
    pub fn expanded() -> Self {
        Self::default()
    }

    /// Build from a model root (an object, or an array whose first element
    /// is the root). Models without `@context` behave like [`expanded`].
    ///
    /// [`expanded`]: AmfContext::expanded
    pub fn from_model(model: &Value) -> Self {
        match model_root(model).and_then(|root| root.get("@context")) {
            Some(Value::Object(ctx)) => Self::from_context(ctx),
            _ => Self::expanded(),
        }
    }

    /// Build from a `@context` object. Non-string entries are ignored.
    pub fn from_context(ctx: &Map<String, Value>) -> Self {
        let aliases = ctx
            .iter()
            .filter_map(|(alias, ns)| ns.as_str().map(|ns| (alias.clone(), ns.to_owned())))
            .collect();
        Self {
            aliases,
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn resolve(&self, iri: &str) -> Option<String> {
        let hash_index = iri.find('#');
        let hash_ns = hash_index.map(|i| &iri[..=i]);
        for (alias, ns) in &self.aliases {
            if ns == iri {
                return Some(alias.clone());
            }
            match hash_index {
                None if !ns.is_empty() && iri.starts_with(ns.as_str()) => {
                    return Some(format!("{alias}:{}", &iri[ns.len()..]));
                }
                Some(i) if hash_ns == Some(ns.as_str()) => {
                    return Some(format!("{alias}:{}", &iri[i + 1..]));
                }
                _ => {}
            }
        }
        None
    }
}

impl Vocabulary for AmfContext {
    fn key<'a>(&self, iri: &'a str) -> Cow<'a, str> {
        if self.aliases.is_empty() || iri.is_empty() {
            return Cow::Borrowed(iri);
        }
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(hit) = cache.get(iri) {
            return Cow::Owned(hit.clone());
        }
        match self.resolve(iri) {
            Some(key) => {
                cache.insert(iri.to_owned(), key.clone());
                Cow::Owned(key)
            }
            None => {
                cache.insert(iri.to_owned(), iri.to_owned());
                Cow::Borrowed(iri)
            }
        }
    }
}
