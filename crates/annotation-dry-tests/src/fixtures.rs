// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! AMF model fixtures in expanded and compact serializations.
//!
//! Both flavors describe the same API with five declared types:
//!
//! | type                    | annotations                                   |
//! |-------------------------|-----------------------------------------------|
//! | `NoAnnotations`         | none                                          |
//! | `notRequiredRepeatable` | `annotationTest` (nil value)                  |
//! | `ErrorResource`         | `deprecated: true`                            |
//! | `ComplexAnnotations`    | `clearanceLevel: { level, signature }`        |
//! | `ComboType`             | all three of the above                        |
//!
//! The expanded flavor stores extension names on the property nodes; the
//! compact flavor stores them on the references.

use amf_vocab::ns::{aml, w3};
use amf_vocab::{find_declared, AmfContext};
use serde_json::{json, Map, Value};

/// Serialization flavor of a fixture model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Full IRIs everywhere, `amf://id#…` identifiers.
    Full,
    /// `@context` aliases, relative identifiers under `@base`.
    Compact,
}

/// Names of the declared types, in declaration order.
pub const TYPE_NAMES: [&str; 5] = [
    "NoAnnotations",
    "notRequiredRepeatable",
    "ErrorResource",
    "ComplexAnnotations",
    "ComboType",
];

struct Terms(Flavor);

impl Terms {
    fn term(&self, alias: &str, ns: &str, local: &str) -> String {
        match self.0 {
            Flavor::Full => format!("{ns}{local}"),
            Flavor::Compact => format!("{alias}:{local}"),
        }
    }

    fn doc(&self, local: &str) -> String {
        self.term("doc", aml::document::NS, local)
    }

    fn core(&self, local: &str) -> String {
        self.term("core", aml::core::NS, local)
    }

    fn data(&self, local: &str) -> String {
        self.term("data", aml::data::NS, local)
    }

    fn shacl(&self, local: &str) -> String {
        self.term("shacl", w3::shacl::NS, local)
    }

    fn xsd(&self, local: &str) -> String {
        self.term("xsd", w3::xml_schema::NS, local)
    }

    /// Identifier as written in `@id`.
    fn id(&self, local: &str) -> String {
        match self.0 {
            Flavor::Full => format!("amf://id#{local}"),
            Flavor::Compact => format!("#{local}"),
        }
    }

    /// Key under which the shape stores the property node for `local`.
    fn property_key(&self, local: &str) -> String {
        format!("amf://id#{local}")
    }

    fn literal(&self, value: &str) -> Value {
        json!([{ "@value": value }])
    }

    fn reference(&self, local: &str, name: &str) -> Value {
        match self.0 {
            Flavor::Full => json!({ "@id": self.id(local) }),
            Flavor::Compact => json!({
                "@id": self.id(local),
                (self.core("extensionName")): self.literal(name)
            }),
        }
    }

    fn with_name(&self, mut node: Value, name: &str) -> Value {
        if self.0 == Flavor::Full {
            if let Value::Object(map) = &mut node {
                map.insert(self.core("extensionName"), self.literal(name));
            }
        }
        json!([node])
    }

    fn nil_property(&self, local: &str) -> Value {
        let node = json!({
            "@id": self.id(&format!("{local}/value")),
            "@type": [self.data("Scalar"), self.data("Node")],
            (self.data("value")): [{ "@value": "", "@type": self.xsd("nil") }]
        });
        self.with_name(node, "annotationTest")
    }

    fn scalar_property(&self, local: &str) -> Value {
        let node = json!({
            "@id": self.id(&format!("{local}/value")),
            "@type": [self.data("Scalar"), self.data("Node")],
            (self.data("value")): self.literal("true")
        });
        self.with_name(node, "deprecated")
    }

    fn object_property(&self, local: &str) -> Value {
        let entry = |field: &str, value: &str| {
            json!([{
                "@id": self.id(&format!("{local}/value/{field}")),
                "@type": [self.data("Scalar"), self.data("Node")],
                (self.data("value")): self.literal(value)
            }])
        };
        let node = json!({
            "@id": self.id(&format!("{local}/value")),
            "@type": [self.data("Object"), self.data("Node")],
            (self.core("name")): self.literal("clearanceLevel"),
            (self.data("level")): entry("level", "high"),
            (self.data("signature")): entry("signature", "230-ghi-9-A")
        });
        self.with_name(node, "clearanceLevel")
    }

    fn declared(&self, name: &str, annotations: &[(&str, &str)]) -> Value {
        let mut map = Map::new();
        map.insert(
            "@id".into(),
            json!(self.id(&format!("/declarations/types/{name}"))),
        );
        map.insert(
            "@type".into(),
            json!([self.term("shapes", "http://a.ml/vocabularies/shapes#", "ScalarShape")]),
        );
        map.insert(self.shacl("name"), self.literal(name));
        if annotations.is_empty() {
            return Value::Object(map);
        }
        let refs: Vec<Value> = annotations
            .iter()
            .map(|(local, kind)| self.reference(&format!("{name}/{local}"), kind))
            .collect();
        map.insert(self.doc("customDomainProperties"), Value::Array(refs));
        for (local, kind) in annotations {
            let local = format!("{name}/{local}");
            let property = match *kind {
                "annotationTest" => self.nil_property(&local),
                "deprecated" => self.scalar_property(&local),
                _ => self.object_property(&local),
            };
            map.insert(self.property_key(&local), property);
        }
        Value::Object(map)
    }
}

/// Fixture model in the given flavor.
pub fn model(flavor: Flavor) -> Value {
    let t = Terms(flavor);
    let declares = vec![
        t.declared("NoAnnotations", &[]),
        t.declared("notRequiredRepeatable", &[("a1", "annotationTest")]),
        t.declared("ErrorResource", &[("a1", "deprecated")]),
        t.declared("ComplexAnnotations", &[("a1", "clearanceLevel")]),
        t.declared(
            "ComboType",
            &[
                ("a1", "deprecated"),
                ("a2", "annotationTest"),
                ("a3", "clearanceLevel"),
            ],
        ),
    ];
    let mut root = json!({
        "@id": "",
        "@type": [t.doc("Document"), t.doc("Fragment"), t.doc("Module"), t.doc("Unit")],
        (t.doc("declares")): declares
    });
    if flavor == Flavor::Compact {
        if let Value::Object(map) = &mut root {
            map.insert(
                "@context".into(),
                json!({
                    "@base": "amf://id",
                    "doc": aml::document::NS,
                    "core": aml::core::NS,
                    "data": aml::data::NS,
                    "shapes": "http://a.ml/vocabularies/shapes#",
                    "shacl": w3::shacl::NS,
                    "xsd": w3::xml_schema::NS
                }),
            );
        }
    }
    json!([root])
}

/// Expanded fixture model.
pub fn full_model() -> Value {
    model(Flavor::Full)
}

/// Compact fixture model.
pub fn compact_model() -> Value {
    model(Flavor::Compact)
}

/// Clone of the declared type `name` from the fixture model of `flavor`.
pub fn declared_shape(flavor: Flavor, name: &str) -> Option<Value> {
    let model = model(flavor);
    let ctx = AmfContext::from_model(&model);
    find_declared(&ctx, &model, name).ok().cloned()
}
