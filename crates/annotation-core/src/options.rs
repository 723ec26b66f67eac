// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Extraction options, persisted through the config service.

use serde::{Deserialize, Serialize};

/// Config key under which [`ExtractOptions`] are stored.
pub const OPTIONS_KEY: &str = "annotations";

/// Where an annotation's display name is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameSource {
    /// The custom-property reference entry, falling back to the property node.
    #[default]
    Reference,
    /// The dereferenced property node only.
    Property,
}

/// Which vocabulary term carries the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameTerm {
    /// `core#extensionName`.
    Extension,
    /// `document#name` (AML or pre-AML namespace).
    Legacy,
    /// `core#extensionName`, then `document#name`.
    #[default]
    Either,
}

/// What to do with records that have neither a name nor a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPolicy {
    /// Emit every record; the renderer suppresses empty ones.
    #[default]
    Keep,
    /// Drop empty records during extraction.
    DropEmpty,
}

/// Tunables for [`Extractor`](crate::Extractor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Name source.
    pub name_source: NameSource,
    /// Name term.
    pub name_term: NameTerm,
    /// Empty-record policy.
    pub empty_policy: EmptyPolicy,
}
