//! Translate document-model schema descriptors into a portable,
//! JSON-Schema-compatible description.
//!
//! Two pieces: a token normalizer (`ty`) mapping native type tokens onto the
//! output vocabulary, and a recursive walker (`lower`) that maps each declared
//! field onto `type`/`items`/`properties`/`required`/`enum`/`format`.
//! Translation is fail-open: unknown tokens and unrecognized shapes degrade to
//! an opaque `object` node instead of erroring, so consumers always receive a
//! structurally valid schema.

pub mod cli;
pub mod lower;
pub mod model;
pub mod schema;
pub mod ty;

pub use lower::{NamedField, extract_fields, translate};
pub use model::{FieldDescriptor, ModelError, ModelSchema};
pub use schema::SchemaNode;
pub use ty::{PrimitiveKind, normalize_type};
