//! The native descriptor model consumed from the document-modeling layer.
//!
//! A schema is an ordered field-name → descriptor mapping; a descriptor is a
//! single slot that may hold a bare type token, array metadata, an embedded
//! sub-schema, or a plain nested object literal. Shape discrimination happens
//! in the walker, not here; this module only carries the declaration and loads
//! it from JSON with path-aware parse diagnostics.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid model descriptor at JSON path {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// An ordered mapping from field name to its declaration. A descriptor file is
/// the mapping itself, with no wrapper object.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ModelSchema {
    pub fields: IndexMap<String, FieldDescriptor>,
}

/// One declared field. Every part is optional; the walker classifies the
/// overall shape from which parts are present.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Native type token (`String`, `Number`, `ObjectId`, ...). Absent when
    /// the field is itself a nested structure.
    #[serde(rename = "type")]
    pub type_token: Option<String>,
    /// Declared as an array. A native `likes: []` declaration arrives as
    /// `isArray` with no `items`.
    pub is_array: bool,
    /// The array's element declaration: a bare token, an object literal, or a
    /// full sub-schema, each expressed as a descriptor of its own.
    pub items: Option<Box<FieldDescriptor>>,
    /// Permitted literal values, verbatim (strings or numbers).
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,
    pub required: bool,
    /// Foreign-schema name on identifier-reference fields. Carried for
    /// completeness; references surface as opaque strings, so it is never
    /// emitted.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// Embedded full sub-schema.
    pub schema: Option<ModelSchema>,
    /// Plain nested object literal (further field declarations with no formal
    /// sub-schema wrapper).
    pub fields: Option<IndexMap<String, FieldDescriptor>>,
}

impl ModelSchema {
    pub fn from_json_str(src: &str) -> Result<Self, ModelError> {
        let de = &mut serde_json::Deserializer::from_str(src);
        serde_path_to_error::deserialize(de).map_err(|err| ModelError::Parse {
            path: err.path().to_string(),
            source: err.into_inner(),
        })
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ModelError> {
        serde_path_to_error::deserialize(value).map_err(|err| ModelError::Parse {
            path: err.path().to_string(),
            source: err.into_inner(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let src = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_parts_parse_from_their_native_names() {
        let schema = ModelSchema::from_json_value(json!({
            "user": {"type": "ObjectId", "ref": "User", "required": true},
            "tags": {"isArray": true, "items": {"type": "String"}},
            "status": {"type": "String", "enum": ["on", "off"]},
        }))
        .unwrap();

        let user = &schema.fields["user"];
        assert_eq!(user.type_token.as_deref(), Some("ObjectId"));
        assert_eq!(user.reference.as_deref(), Some("User"));
        assert!(user.required);

        let tags = &schema.fields["tags"];
        assert!(tags.is_array);
        let element = tags.items.as_deref().unwrap();
        assert_eq!(element.type_token.as_deref(), Some("String"));

        let status = &schema.fields["status"];
        assert_eq!(
            status.enum_values,
            Some(vec![json!("on"), json!("off")])
        );
    }

    #[test]
    fn field_order_is_preserved() {
        let schema = ModelSchema::from_json_str(
            r#"{"zeta": {"type": "String"}, "alpha": {"type": "String"}}"#,
        )
        .unwrap();
        let names: Vec<&str> = schema.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn parse_errors_report_the_json_path() {
        let err = ModelSchema::from_json_str(r#"{"title": {"enum": 5}}"#).unwrap_err();
        match err {
            ModelError::Parse { path, .. } => assert_eq!(path, "title.enum"),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_descriptor_parts_are_ignored() {
        // modeling layers attach extra metadata (defaults, validators); none
        // of it should block translation
        let schema = ModelSchema::from_json_value(json!({
            "date": {"type": "Date", "default": "now", "index": true},
        }))
        .unwrap();
        assert_eq!(schema.fields["date"].type_token.as_deref(), Some("Date"));
    }
}
