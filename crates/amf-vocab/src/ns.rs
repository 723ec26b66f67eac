// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Namespace IRIs of the AMF model vocabularies.
//!
//! Constants hold full (expanded) IRIs. Use a [`Vocabulary`](crate::Vocabulary)
//! to translate them into the keys used by a particular serialization.

/// Sentinel prefix AMF uses when wrapping node identifiers.
pub const AMF_ID: &str = "amf://id";

/// AML vocabularies (`http://a.ml/vocabularies/…`).
pub mod aml {
    /// Document model terms.
    pub mod document {
        /// Namespace.
        pub const NS: &str = "http://a.ml/vocabularies/document#";
        /// Custom domain properties (annotations) attached to a node.
        pub const CUSTOM_DOMAIN_PROPERTIES: &str =
            "http://a.ml/vocabularies/document#customDomainProperties";
        /// Declarations of a document or module.
        pub const DECLARES: &str = "http://a.ml/vocabularies/document#declares";
        /// Encoded domain element of a document.
        pub const ENCODES: &str = "http://a.ml/vocabularies/document#encodes";
        /// Legacy name term for domain extensions.
        pub const NAME: &str = "http://a.ml/vocabularies/document#name";
    }

    /// Core terms.
    pub mod core {
        /// Namespace.
        pub const NS: &str = "http://a.ml/vocabularies/core#";
        /// Extension (annotation) name.
        pub const EXTENSION_NAME: &str = "http://a.ml/vocabularies/core#extensionName";
        /// Generic name.
        pub const NAME: &str = "http://a.ml/vocabularies/core#name";
    }

    /// Data node terms.
    pub mod data {
        /// Namespace. Keys of composite data nodes start with it.
        pub const NS: &str = "http://a.ml/vocabularies/data#";
        /// Scalar literal value.
        pub const VALUE: &str = "http://a.ml/vocabularies/data#value";
        /// Scalar node type.
        pub const SCALAR: &str = "http://a.ml/vocabularies/data#Scalar";
        /// Object node type.
        pub const OBJECT: &str = "http://a.ml/vocabularies/data#Object";
    }
}

/// Pre-AML vocabularies still emitted by older model generators.
pub mod raml {
    /// Legacy document terms.
    pub mod document {
        /// Namespace.
        pub const NS: &str = "http://raml.org/vocabularies/document#";
        /// Custom domain properties.
        pub const CUSTOM_DOMAIN_PROPERTIES: &str =
            "http://raml.org/vocabularies/document#customDomainProperties";
        /// Legacy name term for domain extensions.
        pub const NAME: &str = "http://raml.org/vocabularies/document#name";
    }

    /// Legacy data terms.
    pub mod data {
        /// Namespace.
        pub const NS: &str = "http://raml.org/vocabularies/data#";
    }
}

/// W3C vocabularies.
pub mod w3 {
    /// SHACL.
    pub mod shacl {
        /// Namespace.
        pub const NS: &str = "http://www.w3.org/ns/shacl#";
        /// Shape name.
        pub const NAME: &str = "http://www.w3.org/ns/shacl#name";
    }

    /// XML Schema datatypes.
    pub mod xml_schema {
        /// Namespace.
        pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
        /// Nil datatype; marks an explicitly empty scalar.
        pub const NIL: &str = "http://www.w3.org/2001/XMLSchema#nil";
    }
}
