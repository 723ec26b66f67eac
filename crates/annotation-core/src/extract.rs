// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shape → annotation records.
//!
//! Extraction never fails. Unresolvable references, missing keys and
//! unexpected JSON shapes degrade to absent names/values so a partially
//! compacted or malformed model never takes down the view.

use amf_vocab::{ensure_array, first, literal, ns, Vocabulary};
use serde_json::Value;
use std::borrow::Cow;
use tracing::trace;

use crate::options::{EmptyPolicy, ExtractOptions, NameSource, NameTerm};
use crate::record::{AnnotationRecord, AnnotationValue, ValuePair};

/// Reads custom domain properties off a shape using an injected vocabulary.
#[derive(Debug, Clone)]
pub struct Extractor<V> {
    vocab: V,
    options: ExtractOptions,
}

impl<V> Extractor<V> {
    /// Extractor with default options.
    pub fn new(vocab: V) -> Self {
        Self::with_options(vocab, ExtractOptions::default())
    }

    /// Extractor with explicit options.
    pub fn with_options(vocab: V, options: ExtractOptions) -> Self {
        Self { vocab, options }
    }

    /// Current options.
    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: ExtractOptions) {
        self.options = options;
    }

    /// The injected vocabulary.
    pub fn vocabulary(&self) -> &V {
        &self.vocab
    }
}

impl<V: Vocabulary> Extractor<V> {
    /// Custom-property references of `node`, in source order.
    ///
    /// The model's own key is tried first, then the expanded AML and pre-AML
    /// IRIs.
    pub fn references<'n>(&self, node: &'n Value) -> Vec<&'n Value> {
        let key = self.vocab.key(ns::aml::document::CUSTOM_DOMAIN_PROPERTIES);
        let refs = [
            key.as_ref(),
            ns::aml::document::CUSTOM_DOMAIN_PROPERTIES,
            ns::raml::document::CUSTOM_DOMAIN_PROPERTIES,
        ]
        .into_iter()
        .map(|k| ensure_array(node.get(k)))
        .find(|found| !found.is_empty())
        .unwrap_or_default();
        refs
    }

    /// Whether `node` carries at least one custom-property reference.
    pub fn has_annotations(&self, node: Option<&Value>) -> bool {
        node.is_some_and(|n| !self.references(n).is_empty())
    }

    /// One record per reference, in reference order (subject to the
    /// configured [`EmptyPolicy`]).
    pub fn extract_annotations(&self, node: &Value) -> Vec<AnnotationRecord> {
        self.references(node)
            .into_iter()
            .map(|reference| self.record(node, reference))
            .filter(|record| match self.options.empty_policy {
                EmptyPolicy::Keep => true,
                EmptyPolicy::DropEmpty => !record.is_empty(),
            })
            .collect()
    }

    /// Property node for a reference id, looked up on the shape itself.
    ///
    /// Tries the literal id, then the `amf://id`-prefixed id, then the
    /// compacted `<alias>:<id>` form.
    pub fn dereference<'n>(&self, node: &'n Value, id: &str) -> Option<&'n Value> {
        let id_key = self.vocab.key(ns::AMF_ID);
        let hit = node
            .get(id)
            .or_else(|| node.get(format!("{}{id}", ns::AMF_ID).as_str()))
            .or_else(|| node.get(format!("{id_key}:{id}").as_str()))?;
        first(hit)
    }

    /// Scalar value of a data node.
    ///
    /// Reads `data#value`, taking the first element of an array. A value
    /// typed `xsd:nil` has no value.
    pub fn scalar_value(&self, item: &Value) -> Option<String> {
        let item = first(item)?;
        let key = self.vocab.key(ns::aml::data::VALUE);
        let raw = first(item.get(key.as_ref())?)?;
        if self.vocab.has_type(raw, ns::w3::xml_schema::NIL) {
            return None;
        }
        literal(raw)
    }

    /// Entries of an object value: one pair per data-namespaced key.
    pub fn complex_value(&self, item: &Value) -> Vec<ValuePair> {
        let Some(map) = first(item).and_then(Value::as_object) else {
            return Vec::new();
        };
        let prefixes = [
            self.vocab.key(ns::aml::data::NS),
            Cow::Borrowed(ns::raml::data::NS),
        ];
        map.iter()
            .filter_map(|(key, value)| {
                let rest = prefixes.iter().find_map(|p| key.strip_prefix(p.as_ref()))?;
                // compact keys keep the alias separator
                let label = rest.strip_prefix(':').unwrap_or(rest);
                Some(ValuePair {
                    label: label.to_owned(),
                    value: self.scalar_value(value),
                })
            })
            .collect()
    }

    fn record(&self, node: &Value, reference: &Value) -> AnnotationRecord {
        let id = reference.get("@id").and_then(Value::as_str);
        let property = id.and_then(|id| self.dereference(node, id));
        if property.is_none() {
            trace!(id = ?id, "custom property reference did not resolve");
        }
        let is_scalar = property.is_some_and(|p| self.vocab.has_type(p, ns::aml::data::SCALAR));
        let value = property.and_then(|p| {
            if is_scalar {
                self.scalar_value(p).map(AnnotationValue::Scalar)
            } else {
                Some(AnnotationValue::Composite(self.complex_value(p)))
            }
        });
        AnnotationRecord {
            name: self.name(reference, property),
            is_scalar,
            value,
        }
    }

    fn name(&self, reference: &Value, property: Option<&Value>) -> Option<String> {
        match self.options.name_source {
            NameSource::Reference => self
                .read_name(reference)
                .or_else(|| property.and_then(|p| self.read_name(p))),
            NameSource::Property => property.and_then(|p| self.read_name(p)),
        }
    }

    fn read_name(&self, node: &Value) -> Option<String> {
        let extension = || self.vocab.value(node, ns::aml::core::EXTENSION_NAME);
        let legacy = || {
            self.vocab
                .value(node, ns::aml::document::NAME)
                .or_else(|| self.vocab.value(node, ns::raml::document::NAME))
        };
        match self.options.name_term {
            NameTerm::Extension => extension(),
            NameTerm::Legacy => legacy(),
            NameTerm::Either => extension().or_else(legacy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amf_vocab::AmfContext;
    use ns::aml::core::EXTENSION_NAME;
    use ns::aml::{data, document};
    use serde_json::json;

    fn extractor() -> Extractor<AmfContext> {
        Extractor::new(AmfContext::expanded())
    }

    fn scalar_shape() -> Value {
        json!({
            "@id": "#/shape",
            (document::CUSTOM_DOMAIN_PROPERTIES): [
                { "@id": "#1", (EXTENSION_NAME): "deprecated" }
            ],
            "#1": {
                "@type": [data::SCALAR],
                (data::VALUE): "true"
            }
        })
    }

    #[test]
    fn no_references_means_no_annotations() {
        let ex = extractor();
        let node = json!({"@id": "#/plain"});
        assert!(!ex.has_annotations(Some(&node)));
        assert!(!ex.has_annotations(None));
        assert!(ex.extract_annotations(&node).is_empty());

        let empty = json!({ (document::CUSTOM_DOMAIN_PROPERTIES): [] });
        assert!(!ex.has_annotations(Some(&empty)));
        assert!(ex.extract_annotations(&empty).is_empty());
    }

    #[test]
    fn single_object_reference_counts_as_one() {
        let ex = extractor();
        let node = json!({
            (document::CUSTOM_DOMAIN_PROPERTIES): { "@id": "#1" },
            "#1": { "@type": [data::SCALAR], (data::VALUE): "x" }
        });
        assert!(ex.has_annotations(Some(&node)));
        assert_eq!(ex.extract_annotations(&node).len(), 1);
    }

    #[test]
    fn scalar_annotation_example() {
        let records = extractor().extract_annotations(&scalar_shape());
        assert_eq!(
            records,
            vec![AnnotationRecord {
                name: Some("deprecated".into()),
                is_scalar: true,
                value: Some(AnnotationValue::Scalar("true".into())),
            }]
        );
    }

    #[test]
    fn array_wrapped_scalar_takes_first_element() {
        let node = json!({
            (document::CUSTOM_DOMAIN_PROPERTIES): [{ "@id": "#1" }],
            "#1": [{
                "@type": [data::SCALAR],
                (data::VALUE): [{ "@value": "first" }, { "@value": "second" }]
            }]
        });
        let records = extractor().extract_annotations(&node);
        assert_eq!(records[0].scalar(), Some("first"));
    }

    #[test]
    fn nil_scalar_has_no_value() {
        let node = json!({
            (document::CUSTOM_DOMAIN_PROPERTIES): [{ "@id": "#1" }],
            "#1": {
                "@type": [data::SCALAR],
                (EXTENSION_NAME): "annotationTest",
                (data::VALUE): [{ "@value": "", "@type": ns::w3::xml_schema::NIL }]
            }
        });
        let records = extractor().extract_annotations(&node);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_scalar);
        assert!(!records[0].has_value());
        assert_eq!(records[0].name.as_deref(), Some("annotationTest"));
    }

    #[test]
    fn composite_annotation_example() {
        let node = json!({
            (document::CUSTOM_DOMAIN_PROPERTIES): [{ "@id": "#1" }],
            "#1": {
                "@type": [data::OBJECT],
                "http://a.ml/vocabularies/data#level1": { (data::VALUE): "5" },
                "http://a.ml/vocabularies/data#level2": { (data::VALUE): "9" }
            }
        });
        let records = extractor().extract_annotations(&node);
        assert!(!records[0].is_scalar);
        assert_eq!(
            records[0].pairs(),
            Some(
                &[
                    ValuePair { label: "level1".into(), value: Some("5".into()) },
                    ValuePair { label: "level2".into(), value: Some("9".into()) },
                ][..]
            )
        );
    }

    #[test]
    fn compact_composite_labels_drop_alias_separator() {
        let ex = Extractor::new(AmfContext::from_model(&json!({
            "@context": { "data": data::NS, "doc": document::NS }
        })));
        let node = json!({
            "doc:customDomainProperties": [{ "@id": "#1" }],
            "#1": {
                "@type": ["data:Object"],
                "data:level": [{ "data:value": [{ "@value": "high" }] }]
            }
        });
        let pairs = ex.extract_annotations(&node)[0].pairs().map(<[_]>::to_vec);
        assert_eq!(
            pairs,
            Some(vec![ValuePair { label: "level".into(), value: Some("high".into()) }])
        );
    }

    #[test]
    fn dereference_tries_each_id_form() {
        let ctx = AmfContext::from_model(&json!({ "@context": { "amf": ns::AMF_ID } }));
        let ex = Extractor::new(ctx);
        let literal_hit = json!({ "#1": { "@id": "a" } });
        let wrapped_hit = json!({ "amf://id#1": { "@id": "b" } });
        let aliased_hit = json!({ "amf:#1": { "@id": "c" } });
        assert_eq!(ex.dereference(&literal_hit, "#1").unwrap()["@id"], "a");
        assert_eq!(ex.dereference(&wrapped_hit, "#1").unwrap()["@id"], "b");
        assert_eq!(ex.dereference(&aliased_hit, "#1").unwrap()["@id"], "c");
        assert!(ex.dereference(&json!({}), "#1").is_none());
    }

    #[test]
    fn unresolved_reference_still_yields_a_record() {
        let node = json!({
            (document::CUSTOM_DOMAIN_PROPERTIES): [
                { "@id": "#missing", (EXTENSION_NAME): "ghost" },
                { "@id": "#1" }
            ],
            "#1": { "@type": [data::SCALAR], (data::VALUE): "v", (EXTENSION_NAME): "real" }
        });
        let records = extractor().extract_annotations(&node);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("ghost"));
        assert!(!records[0].is_scalar);
        assert!(!records[0].has_value());
        assert_eq!(records[1].name.as_deref(), Some("real"));
    }

    #[test]
    fn drop_empty_policy_filters_nameless_valueless_records() {
        let node = json!({
            (document::CUSTOM_DOMAIN_PROPERTIES): [{ "@id": "#missing" }, { "@id": "#1" }],
            "#1": { "@type": [data::SCALAR], (data::VALUE): "v" }
        });
        let keep = extractor().extract_annotations(&node);
        assert_eq!(keep.len(), 2);
        assert!(keep[0].is_empty());

        let drop = Extractor::with_options(
            AmfContext::expanded(),
            ExtractOptions {
                empty_policy: EmptyPolicy::DropEmpty,
                ..ExtractOptions::default()
            },
        )
        .extract_annotations(&node);
        assert_eq!(drop.len(), 1);
        assert_eq!(drop[0].scalar(), Some("v"));
    }

    #[test]
    fn name_source_and_term_are_configurable() {
        let node = json!({
            (document::CUSTOM_DOMAIN_PROPERTIES): [
                { "@id": "#1", (EXTENSION_NAME): "fromReference" }
            ],
            "#1": {
                "@type": [data::SCALAR],
                (data::VALUE): "v",
                (ns::raml::document::NAME): "fromPropertyLegacy"
            }
        });
        let with = |name_source, name_term| {
            Extractor::with_options(
                AmfContext::expanded(),
                ExtractOptions { name_source, name_term, ..ExtractOptions::default() },
            )
            .extract_annotations(&node)[0]
                .name
                .clone()
        };
        assert_eq!(with(NameSource::Reference, NameTerm::Either).as_deref(), Some("fromReference"));
        assert_eq!(with(NameSource::Property, NameTerm::Either).as_deref(), Some("fromPropertyLegacy"));
        assert_eq!(with(NameSource::Property, NameTerm::Extension), None);
        // the reference has no legacy name, so the property node supplies it
        assert_eq!(with(NameSource::Reference, NameTerm::Legacy).as_deref(), Some("fromPropertyLegacy"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let ex = extractor();
        let node = scalar_shape();
        assert_eq!(ex.extract_annotations(&node), ex.extract_annotations(&node));
    }

    #[test]
    fn drop_empty_matches_what_renders() {
        let node = json!({
            (document::CUSTOM_DOMAIN_PROPERTIES): [{ "@id": "#obj" }, { "@id": "#nil" }, { "@id": "#ok" }],
            "#obj": { "@type": [data::OBJECT] },
            "#nil": { "@type": [data::SCALAR], (data::VALUE): "nil" },
            "#ok": { "@type": [data::SCALAR], (data::VALUE): "v" }
        });
        let keep = extractor().extract_annotations(&node);
        assert_eq!(keep.len(), 3);
        assert_eq!(keep[0].pairs(), Some(&[][..]));
        assert_eq!(keep[1].scalar(), Some("nil"));
        assert!(keep[0].is_empty());
        assert!(keep[1].is_empty());

        let drop = Extractor::with_options(
            AmfContext::expanded(),
            ExtractOptions {
                empty_policy: EmptyPolicy::DropEmpty,
                ..ExtractOptions::default()
            },
        )
        .extract_annotations(&node);
        assert_eq!(drop.len(), 1);
        assert_eq!(drop[0].scalar(), Some("v"));
    }

    #[test]
    fn reference_name_wins_over_property_name() {
        let node = json!({
            (document::CUSTOM_DOMAIN_PROPERTIES): [
                { "@id": "#1", (EXTENSION_NAME): "onReference" }
            ],
            "#1": {
                "@type": [data::SCALAR],
                (data::VALUE): "v",
                (EXTENSION_NAME): "onProperty"
            }
        });
        let by_source = |name_source| {
            Extractor::with_options(
                AmfContext::expanded(),
                ExtractOptions { name_source, ..ExtractOptions::default() },
            )
            .extract_annotations(&node)[0]
                .name
                .clone()
        };
        assert_eq!(by_source(NameSource::Reference).as_deref(), Some("onReference"));
        assert_eq!(by_source(NameSource::Property).as_deref(), Some("onProperty"));
    }

    #[test]
    fn pre_aml_namespaces_are_understood() {
        let node = json!({
            (ns::raml::document::CUSTOM_DOMAIN_PROPERTIES): [
                { "@id": "#1", (ns::raml::document::NAME): "clearanceLevel" }
            ],
            "#1": {
                "@type": [data::OBJECT],
                "http://raml.org/vocabularies/data#level": { (data::VALUE): "high" }
            }
        });
        let ex = extractor();
        assert!(ex.has_annotations(Some(&node)));
        let records = ex.extract_annotations(&node);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("clearanceLevel"));
        assert_eq!(
            records[0].pairs(),
            Some(&[ValuePair { label: "level".into(), value: Some("high".into()) }][..])
        );
    }
}
