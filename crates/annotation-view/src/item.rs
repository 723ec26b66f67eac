// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Records → display items.

use annotation_core::{AnnotationRecord, AnnotationValue};

/// Renderable value of an annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayValue {
    /// Nothing to show next to the name.
    None,
    /// Single literal.
    Scalar(String),
    /// `label: value` entries.
    Pairs(Vec<(String, String)>),
}

/// One annotation as a view shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayItem {
    /// Annotation name, if known.
    pub name: Option<String>,
    /// Value to render.
    pub value: DisplayValue,
}

fn display_value(record: &AnnotationRecord) -> DisplayValue {
    if !record.has_renderable_value() {
        return DisplayValue::None;
    }
    match &record.value {
        Some(AnnotationValue::Scalar(s)) => DisplayValue::Scalar(s.clone()),
        Some(AnnotationValue::Composite(pairs)) => DisplayValue::Pairs(
            pairs
                .iter()
                .map(|p| (p.label.clone(), p.value.clone().unwrap_or_default()))
                .collect(),
        ),
        None => DisplayValue::None,
    }
}

/// Display items for `records`, in order, without empty entries.
///
/// An item is dropped when it has no name and no renderable value. Scalar
/// values that are empty or the literal `nil` are not rendered.
pub fn display_items(records: &[AnnotationRecord]) -> Vec<DisplayItem> {
    records
        .iter()
        .filter_map(|record| {
            if record.is_empty() {
                return None;
            }
            Some(DisplayItem {
                name: record.name.clone(),
                value: display_value(record),
            })
        })
        .collect()
}
