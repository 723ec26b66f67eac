// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Annotation widget exposed for JS/WASM hosts.
//!
//! Wraps an [`AnnotationDocument`] and an [`HtmlView`] behind a small
//! string-in/string-out API so a web page can hand over a model, pick a
//! shape and get markup back.
//!
//! - Built with `--features wasm`, the widget is exported via `wasm-bindgen`
//!   and gains `customList()` (structured) and a change callback.
//! - Malformed model or shape JSON never fails: it behaves as an empty model
//!   or no shape, and the widget hides itself.

use amf_vocab::{find_by_id, find_declared, AmfContext};
use annotation_core::{AnnotationDocument, AnnotationRecord, ExtractOptions};
use annotation_view::{present, HtmlView};
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use tracing::warn;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Annotation widget state: model, current shape, derived records and markup.
///
/// Invariants:
///
/// - markup and host attributes always reflect the current shape; every
///   mutation re-presents the document,
/// - `visibility_events` grows only when `has_custom_properties` flips.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub struct AnnotationWidget {
    model: Value,
    document: AnnotationDocument<AmfContext>,
    view: HtmlView,
    events: Rc<RefCell<Vec<bool>>>,
}

impl AnnotationWidget {
    fn from_model(model: Value, options: ExtractOptions) -> Self {
        let mut document =
            AnnotationDocument::with_options(AmfContext::from_model(&model), options);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        document.subscribe(move |has| sink.borrow_mut().push(has));
        let mut widget = Self {
            model,
            document,
            view: HtmlView::new(),
            events,
        };
        widget.refresh();
        widget
    }

    /// Widget over `model_json` with explicit extraction options.
    pub fn with_options(model_json: &str, options: ExtractOptions) -> Self {
        let model = serde_json::from_str(model_json).unwrap_or(Value::Null);
        Self::from_model(model, options)
    }

    fn refresh(&mut self) {
        present(&self.document, &mut self.view);
    }

    fn set_shape(&mut self, shape: Option<Value>) {
        if self.document.set_shape(shape.map(Arc::new)) {
            self.refresh();
        }
    }

    /// Records for the current shape.
    pub fn records(&self) -> &[AnnotationRecord] {
        self.document.custom_list()
    }

    /// Every `has_custom_properties` change so far, oldest first.
    pub fn visibility_events(&self) -> Vec<bool> {
        self.events.borrow().clone()
    }

    /// Serialize the current records to JSON (host use).
    pub fn custom_list_json(&self) -> String {
        serde_json::to_string(self.records()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Host attribute `aria-hidden`, once set.
    pub fn aria_hidden(&self) -> Option<&'static str> {
        self.view.aria_hidden()
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl AnnotationWidget {
    /// Widget over a JSON-LD model (expanded or compact) with default options.
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    pub fn new(model_json: &str) -> Self {
        Self::with_options(model_json, ExtractOptions::default())
    }

    /// Select a declared type by name. Returns whether it was found; an
    /// unknown name clears the shape.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = setShapeByName))]
    pub fn set_shape_by_name(&mut self, name: &str) -> bool {
        let ctx = self.document.extractor().vocabulary();
        let shape = find_declared(ctx, &self.model, name).ok().cloned();
        let found = shape.is_some();
        self.set_shape(shape);
        found
    }

    /// Select a declared or encoded node by `@id`.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = setShapeById))]
    pub fn set_shape_by_id(&mut self, id: &str) -> bool {
        let ctx = self.document.extractor().vocabulary();
        let shape = find_by_id(ctx, &self.model, id).ok().cloned();
        let found = shape.is_some();
        self.set_shape(shape);
        found
    }

    /// Use an arbitrary shape given as JSON. Invalid JSON clears the shape.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = setShapeJson))]
    pub fn set_shape_json(&mut self, shape_json: &str) {
        self.set_shape(serde_json::from_str(shape_json).ok());
    }

    /// Drop the current shape.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = clearShape))]
    pub fn clear_shape(&mut self) {
        self.set_shape(None);
    }

    /// True if the current shape has annotations.
    #[cfg_attr(feature = "wasm", wasm_bindgen(getter, js_name = hasCustomProperties))]
    pub fn has_custom_properties(&self) -> bool {
        self.document.has_custom_properties()
    }

    /// Whether the host element should carry `hidden`.
    #[cfg_attr(feature = "wasm", wasm_bindgen(getter))]
    pub fn hidden(&self) -> bool {
        self.view.is_hidden()
    }

    /// Inner markup for the current shape.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = renderHtml))]
    pub fn render_html(&self) -> String {
        self.view.markup().to_owned()
    }

    /// Host element including attributes.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = toHtml))]
    pub fn to_html(&self) -> String {
        self.view.to_html()
    }
}

/// Logs a failed host callback. Returns whether the callback succeeded.
#[cfg_attr(not(feature = "wasm"), allow(dead_code))]
fn callback_succeeded<T, E: fmt::Debug>(outcome: Result<T, E>) -> bool {
    match outcome {
        Ok(_) => true,
        Err(err) => {
            warn!(error = ?err, "has-custom-properties listener threw");
            false
        }
    }
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl AnnotationWidget {
    /// Records as structured JS values.
    #[wasm_bindgen(js_name = customList)]
    pub fn custom_list(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.records()).map_err(Into::into)
    }

    /// Records as a JSON string.
    #[wasm_bindgen(js_name = customListJson)]
    pub fn custom_list_json_js(&self) -> String {
        self.custom_list_json()
    }

    /// Register `callback(hasCustomProperties)`; invoked only on change.
    #[wasm_bindgen(js_name = onHasCustomPropertiesChanged)]
    pub fn on_has_custom_properties_changed(&mut self, callback: js_sys::Function) {
        self.document.subscribe(move |has| {
            callback_succeeded(callback.call1(&JsValue::NULL, &JsValue::from_bool(has)));
        });
    }
}
