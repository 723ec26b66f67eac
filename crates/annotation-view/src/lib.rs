// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! View port contract for annotation documents.
//!
//! This crate maps annotation records to display items and defines the
//! port views implement. It contains NO extraction logic; that lives in
//! annotation-core.
//!
//! # Design Principles
//!
//! - **Views are dumb**: they receive display items and a visibility flag.
//! - **Suppression happens once**: [`display_items`] drops records with
//!   neither a name nor a renderable value, so every view agrees.

mod html;
mod item;
mod port;

pub use html::{HtmlView, INFO_ICON};
pub use item::{display_items, DisplayItem, DisplayValue};
pub use port::{present, AnnotationView};
