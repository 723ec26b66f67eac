// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording view for headless testing of the presentation port.

use annotation_view::{AnnotationView, DisplayItem};

/// Call recorded by [`RecordingView`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewCall {
    /// `set_visible(bool)`.
    SetVisible(bool),
    /// `render(items)`, with the number of items.
    Render(usize),
}

/// View that records every port call and keeps the last rendered items.
#[derive(Debug, Default)]
pub struct RecordingView {
    /// Calls in order.
    pub calls: Vec<ViewCall>,
    /// Items from the most recent render.
    pub items: Vec<DisplayItem>,
    /// Most recent visibility flag.
    pub visible: Option<bool>,
}

impl RecordingView {
    /// Create a new recording view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of render calls so far.
    pub fn render_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ViewCall::Render(_)))
            .count()
    }

    /// Names of the last rendered items (`None` for nameless items).
    pub fn names(&self) -> Vec<Option<&str>> {
        self.items.iter().map(|i| i.name.as_deref()).collect()
    }
}

impl AnnotationView for RecordingView {
    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
        self.calls.push(ViewCall::SetVisible(visible));
    }

    fn render(&mut self, items: &[DisplayItem]) {
        self.items = items.to_vec();
        self.calls.push(ViewCall::Render(items.len()));
    }
}
