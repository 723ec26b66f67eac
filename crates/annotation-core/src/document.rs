// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Annotation document state: current shape, derived records, visibility flag.
//!
//! Records are recomputed wholesale whenever a different shape is set. Setting
//! the same `Arc` again is a no-op. Listeners fire only when the
//! `has_custom_properties` flag flips.

use amf_vocab::Vocabulary;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::extract::Extractor;
use crate::options::ExtractOptions;
use crate::record::AnnotationRecord;

/// Handle returned by [`AnnotationDocument::subscribe`].
pub type ListenerId = u64;

type Listener = Box<dyn FnMut(bool)>;

/// Derived annotation state for one shape at a time.
pub struct AnnotationDocument<V> {
    extractor: Extractor<V>,
    shape: Option<Arc<Value>>,
    has_custom_properties: bool,
    custom_list: Vec<AnnotationRecord>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
}

impl<V> fmt::Debug for AnnotationDocument<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationDocument")
            .field("has_custom_properties", &self.has_custom_properties)
            .field("custom_list", &self.custom_list)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<V: Vocabulary> AnnotationDocument<V> {
    /// Empty document (no shape, hidden) with default options.
    pub fn new(vocab: V) -> Self {
        Self::with_options(vocab, ExtractOptions::default())
    }

    /// Empty document with explicit options.
    pub fn with_options(vocab: V, options: ExtractOptions) -> Self {
        Self {
            extractor: Extractor::with_options(vocab, options),
            shape: None,
            has_custom_properties: false,
            custom_list: Vec::new(),
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    /// Current shape.
    pub fn shape(&self) -> Option<&Arc<Value>> {
        self.shape.as_ref()
    }

    /// True when the current shape has at least one annotation.
    pub fn has_custom_properties(&self) -> bool {
        self.has_custom_properties
    }

    /// Records for the current shape.
    pub fn custom_list(&self) -> &[AnnotationRecord] {
        &self.custom_list
    }

    /// The extractor in use.
    pub fn extractor(&self) -> &Extractor<V> {
        &self.extractor
    }

    /// Replace the shape. Returns `true` when state was recomputed.
    pub fn set_shape(&mut self, shape: Option<Arc<Value>>) -> bool {
        let unchanged = match (&self.shape, &shape) {
            (Some(old), Some(new)) => Arc::ptr_eq(old, new),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            debug!("shape unchanged; skipping recomputation");
            return false;
        }
        self.shape = shape;
        self.recompute();
        true
    }

    /// Change options and recompute against the current shape.
    pub fn set_options(&mut self, options: ExtractOptions) {
        if self.extractor.options() == options {
            return;
        }
        self.extractor.set_options(options);
        self.recompute();
    }

    /// Register a callback for `has_custom_properties` changes.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(bool) + 'static,
    {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn recompute(&mut self) {
        let shape = self.shape.as_deref();
        let has = self.extractor.has_annotations(shape);
        self.custom_list = match shape {
            Some(shape) if has => self.extractor.extract_annotations(shape),
            _ => Vec::new(),
        };
        debug!(
            has_custom_properties = has,
            records = self.custom_list.len(),
            "annotations recomputed"
        );
        self.set_has_custom_properties(has);
    }

    fn set_has_custom_properties(&mut self, value: bool) {
        if self.has_custom_properties == value {
            return;
        }
        self.has_custom_properties = value;
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }
}
