// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Normalized annotation records.

use serde::Serialize;

/// One `label: value` entry of a composite annotation value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValuePair {
    /// Key with the data namespace stripped.
    pub label: String,
    /// Scalar value of the entry, if it has one.
    pub value: Option<String>,
}

/// Value carried by an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum AnnotationValue {
    /// Single literal.
    Scalar(String),
    /// Ordered `label: value` entries of an object value.
    Composite(Vec<ValuePair>),
}

/// An annotation found on a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationRecord {
    /// Extension name, e.g. `deprecated`.
    pub name: Option<String>,
    /// Whether the property node is typed `data#Scalar`.
    pub is_scalar: bool,
    /// Extracted value; `None` for nil scalars and unresolved properties.
    pub value: Option<AnnotationValue>,
}

impl AnnotationRecord {
    /// Whether extraction produced a value (a nil scalar does not).
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the value shows up when rendered.
    ///
    /// Empty scalars, the literal `nil` and composites without entries
    /// render as nothing.
    pub fn has_renderable_value(&self) -> bool {
        match &self.value {
            Some(AnnotationValue::Scalar(s)) => !s.is_empty() && s != "nil",
            Some(AnnotationValue::Composite(pairs)) => !pairs.is_empty(),
            None => false,
        }
    }

    /// Neither a name nor a renderable value.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && !self.has_renderable_value()
    }

    /// Scalar literal, if the value is scalar.
    pub fn scalar(&self) -> Option<&str> {
        match &self.value {
            Some(AnnotationValue::Scalar(s)) => Some(s),
            _ => None,
        }
    }

    /// Composite entries, if the value is composite.
    pub fn pairs(&self) -> Option<&[ValuePair]> {
        match &self.value {
            Some(AnnotationValue::Composite(pairs)) => Some(pairs),
            _ => None,
        }
    }
}
