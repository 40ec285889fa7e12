//! Native type-token normalization.
//!
//! Modeling layers spell their field types several ways (`String` vs
//! `"string"`, `ObjectId` vs `ObjectID`), so the table is keyed by the
//! lowercased token and kept extensible. Unknown tokens never fail: they fall
//! through to `Opaque`, which surfaces as a generic `object`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Output vocabulary of the portable schema view.
///
/// `Array` is never produced by normalization; the walker detects arrays from
/// structural shape, not from a type token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    #[default]
    Object,
    Array,
}

/// Classification of a recognized native token, one step before the output
/// vocabulary. `Date` and `Reference` need walker-side treatment (`format`
/// attachment and the string override) that plain normalization can't express.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    String,
    Number,
    Boolean,
    Date,
    Reference,
    Opaque,
}

static TOKEN_KINDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("string", TokenKind::String),
        ("number", TokenKind::Number),
        ("decimal128", TokenKind::Number),
        ("bigint", TokenKind::Number),
        ("boolean", TokenKind::Boolean),
        ("date", TokenKind::Date),
        // both native spellings (`ObjectId`, `ObjectID`) fold together here
        ("objectid", TokenKind::Reference),
        ("buffer", TokenKind::Opaque),
        ("mixed", TokenKind::Opaque),
    ])
});

pub fn classify_token(token: &str) -> TokenKind {
    TOKEN_KINDS
        .get(token.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(TokenKind::Opaque)
}

/// Map a native type token to the output vocabulary.
///
/// Dates normalize to `string`; the walker attaches `format: "date-time"`
/// separately. Identifier references normalize to `object` (an opaque
/// identifier); the walker overrides reference *fields* to `string` per the
/// external contract.
pub fn normalize_type(token: &str) -> PrimitiveKind {
    match classify_token(token) {
        TokenKind::String | TokenKind::Date => PrimitiveKind::String,
        TokenKind::Number => PrimitiveKind::Number,
        TokenKind::Boolean => PrimitiveKind::Boolean,
        TokenKind::Reference | TokenKind::Opaque => PrimitiveKind::Object,
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_tokens_normalize_to_string() {
        assert_eq!(normalize_type("String"), PrimitiveKind::String);
        assert_eq!(normalize_type("string"), PrimitiveKind::String);
    }

    #[test]
    fn scalar_tokens_normalize_to_their_kind() {
        assert_eq!(normalize_type("Number"), PrimitiveKind::Number);
        assert_eq!(normalize_type("Decimal128"), PrimitiveKind::Number);
        assert_eq!(normalize_type("BigInt"), PrimitiveKind::Number);
        assert_eq!(normalize_type("Boolean"), PrimitiveKind::Boolean);
    }

    #[test]
    fn dates_normalize_to_string() {
        // the date-time format marker is the walker's job, not normalization's
        assert_eq!(normalize_type("Date"), PrimitiveKind::String);
        assert_eq!(classify_token("Date"), TokenKind::Date);
    }

    #[test]
    fn both_reference_spellings_normalize_to_object() {
        assert_eq!(normalize_type("ObjectId"), PrimitiveKind::Object);
        assert_eq!(normalize_type("ObjectID"), PrimitiveKind::Object);
        assert_eq!(classify_token("ObjectId"), TokenKind::Reference);
        assert_eq!(classify_token("ObjectID"), TokenKind::Reference);
        assert_eq!(classify_token("objectid"), TokenKind::Reference);
    }

    #[test]
    fn opaque_and_unknown_tokens_fall_back_to_object() {
        assert_eq!(normalize_type("Buffer"), PrimitiveKind::Object);
        assert_eq!(normalize_type("Mixed"), PrimitiveKind::Object);
        assert_eq!(normalize_type("Geolocation"), PrimitiveKind::Object);
        assert_eq!(classify_token("Geolocation"), TokenKind::Opaque);
    }

    #[test]
    fn normalization_never_produces_array() {
        for token in ["Array", "array", "List", ""] {
            assert_ne!(normalize_type(token), PrimitiveKind::Array);
        }
    }
}
