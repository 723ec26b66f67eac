// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! View port trait defining the presentation contract.

use amf_vocab::Vocabulary;
use annotation_core::AnnotationDocument;

use crate::item::{display_items, DisplayItem};

/// Annotation view port.
///
/// Implementors receive a visibility flag and display items, then render.
/// Adapters (HTML, terminal, a test recorder) implement this trait.
pub trait AnnotationView {
    /// Show or hide the whole view. Hidden views are also hidden from
    /// assistive technology.
    fn set_visible(&mut self, visible: bool);

    /// Replace the rendered items.
    fn render(&mut self, items: &[DisplayItem]);
}

/// Push the document's current state into `view`.
pub fn present<V, W>(document: &AnnotationDocument<V>, view: &mut W)
where
    V: Vocabulary,
    W: AnnotationView + ?Sized,
{
    view.set_visible(document.has_custom_properties());
    view.render(&display_items(document.custom_list()));
}
