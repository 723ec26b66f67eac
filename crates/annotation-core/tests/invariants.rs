// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property tests: one record per reference, in reference order.
use amf_vocab::{ns, AmfContext};
use annotation_core::Extractor;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// A shape with one reference per entry. `Some(name)` entries resolve to a
/// scalar property carrying that name; `None` entries dangle.
fn shape_with(entries: &[Option<String>]) -> Value {
    let mut map = Map::new();
    let mut refs = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let id = format!("#p{i}");
        refs.push(json!({ "@id": id }));
        if let Some(name) = entry {
            map.insert(
                id,
                json!({
                    "@type": [ns::aml::data::SCALAR],
                    (ns::aml::data::VALUE): [{ "@value": format!("v{i}") }],
                    (ns::aml::core::EXTENSION_NAME): [{ "@value": name }]
                }),
            );
        }
    }
    map.insert(
        ns::aml::document::CUSTOM_DOMAIN_PROPERTIES.to_owned(),
        Value::Array(refs),
    );
    Value::Object(map)
}

proptest! {
    #[test]
    fn record_count_and_order_match_references(
        entries in prop::collection::vec(prop::option::of("[a-z]{1,8}"), 0..12)
    ) {
        let ex = Extractor::new(AmfContext::expanded());
        let node = shape_with(&entries);
        let records = ex.extract_annotations(&node);

        prop_assert_eq!(ex.has_annotations(Some(&node)), !entries.is_empty());
        prop_assert_eq!(records.len(), entries.len());
        for (i, (record, entry)) in records.iter().zip(&entries).enumerate() {
            prop_assert_eq!(record.name.as_ref(), entry.as_ref());
            let expected = entry.as_ref().map(|_| format!("v{i}"));
            prop_assert_eq!(record.scalar().map(str::to_owned), expected);
        }
        prop_assert_eq!(ex.extract_annotations(&node), records);
    }
}
