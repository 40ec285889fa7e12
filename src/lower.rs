//! The schema walker: lower a native model into the portable schema view.
//!
//! One recursive pass over the field table. Each slot is classified by shape,
//! in fixed priority order: embedded sub-schema, array, nested object literal,
//! then leaf. Required-field aggregation is strictly per scope; every call
//! that produces an object node scans only its own direct descriptors, so
//! requiredness never leaks across nesting levels. The walk never fails:
//! whatever it cannot recognize becomes an opaque `object` node.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{FieldDescriptor, ModelSchema};
use crate::schema::SchemaNode;
use crate::ty::{PrimitiveKind, TokenKind, classify_token, normalize_type};

/// Translate a whole model schema. The result is always an object node with a
/// `properties` entry per declared field and `required` listing the direct
/// fields declared `required: true` (omitted when there are none).
pub fn translate(schema: &ModelSchema) -> SchemaNode {
    lower_object(&schema.fields)
}

/// A top-level property flattened into a named entry, for inspection and
/// list-shaped consumers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedField {
    pub field: String,
    #[serde(flatten)]
    pub node: SchemaNode,
}

/// Flatten a schema's top-level `properties` into named entries. Derived from
/// [`translate`]; there is no separate translation path.
pub fn extract_fields(schema: &ModelSchema) -> Vec<NamedField> {
    translate(schema)
        .properties
        .unwrap_or_default()
        .into_iter()
        .map(|(field, node)| NamedField { field, node })
        .collect()
}

fn lower_object(fields: &IndexMap<String, FieldDescriptor>) -> SchemaNode {
    let mut properties = IndexMap::with_capacity(fields.len());
    let mut required = Vec::new();
    for (name, descriptor) in fields {
        properties.insert(name.clone(), lower_field(descriptor));
        if descriptor.required {
            required.push(name.clone());
        }
    }
    SchemaNode {
        kind: PrimitiveKind::Object,
        properties: Some(properties),
        required: (!required.is_empty()).then_some(required),
        ..SchemaNode::default()
    }
}

fn lower_field(descriptor: &FieldDescriptor) -> SchemaNode {
    // 1) embedded full sub-schema
    if let Some(schema) = &descriptor.schema {
        return translate(schema);
    }

    // 2) array declaration; the element is itself a descriptor, so the same
    //    classification covers bare tokens, object literals, sub-schemas, and
    //    nested arrays. An element-less declaration (`likes: []`) gets opaque
    //    items.
    if descriptor.is_array || descriptor.items.is_some() {
        let items = match &descriptor.items {
            Some(element) => lower_field(element),
            None => SchemaNode::opaque(),
        };
        return SchemaNode {
            kind: PrimitiveKind::Array,
            items: Some(Box::new(items)),
            ..SchemaNode::default()
        };
    }

    // 3) plain nested object literal, with its own properties/required scope
    if let Some(fields) = &descriptor.fields {
        return lower_object(fields);
    }

    // 4)-6) leaf
    match descriptor.type_token.as_deref() {
        // references surface to consumers as opaque string identifiers, not
        // as nested objects
        Some(token) if classify_token(token) == TokenKind::Reference => {
            SchemaNode::of(PrimitiveKind::String)
        }
        Some(token) => {
            let format = matches!(classify_token(token), TokenKind::Date)
                .then(|| "date-time".to_string());
            SchemaNode {
                kind: normalize_type(token),
                format,
                enum_values: descriptor.enum_values.clone(),
                ..SchemaNode::default()
            }
        }
        None => SchemaNode::opaque(),
    }
}

// ------------------------------- Tests ------------------------------------ //
