//! The translated output form: a declarative schema node compatible with
//! JSON-Schema-style tooling (`type`, `items`, `properties`, `required`,
//! `enum`, `format` only).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ty::PrimitiveKind;

/// One node of the output schema tree.
///
/// Exactly one `type` per node. `properties`/`required` only appear on object
/// nodes, `items` only on array nodes (and is always a single node, never a
/// tuple), `format` only on date-sourced strings. Absent metadata is omitted
/// from serialization entirely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub kind: PrimitiveKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
}

impl SchemaNode {
    pub fn of(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// The most conservative descriptive guess: `object` with no detail.
    /// Untyped declarations and unrecognized shapes resolve here.
    pub fn opaque() -> Self {
        Self::of(PrimitiveKind::Object)
    }
}
