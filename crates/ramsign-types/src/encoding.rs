//! The persisted signature encoding
//!
//! A captured signature is stored as a single tagged string:
//! `typed:<name>`, `style:<name>:<styleIndex>`, or `drawn:<dataUri>`.
//! [`EncodedSignature`] is the decoded form. Decoding never fails:
//! strings without a recognized prefix come back as
//! [`EncodedSignature::Unrecognized`] and render as a fallback label
//! instead of breaking the history panel.
//!
//! Names may themselves contain colons, so a `style:` payload is split
//! on its last colon: an integer tail is the style index, anything else
//! means the whole payload is the name with index 0.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag for typed-name signatures
pub const TYPED_PREFIX: &str = "typed:";
/// Tag for styled-name signatures
pub const STYLE_PREFIX: &str = "style:";
/// Tag for freehand drawn signatures
pub const DRAWN_PREFIX: &str = "drawn:";

/// A captured signature in its persisted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EncodedSignature {
    /// A typed name, displayed as plain emphasized text
    Typed { name: String },
    /// A typed name displayed under a catalog style
    Styled { name: String, style_index: usize },
    /// A freehand drawing as a self-contained `data:` URI
    Drawn { image_data: String },
    /// A stored value with no recognized tag, preserved byte for byte
    Unrecognized { raw: String },
}

impl EncodedSignature {
    /// Decode a stored signature string.
    ///
    /// Never fails: unknown formats map to
    /// [`EncodedSignature::Unrecognized`] so one bad row cannot block a
    /// list of good ones.
    pub fn parse(raw: &str) -> Self {
        if let Some(name) = raw.strip_prefix(TYPED_PREFIX) {
            return EncodedSignature::Typed {
                name: name.to_string(),
            };
        }
        if let Some(payload) = raw.strip_prefix(STYLE_PREFIX) {
            return parse_styled(payload);
        }
        if let Some(image_data) = raw.strip_prefix(DRAWN_PREFIX) {
            return EncodedSignature::Drawn {
                image_data: image_data.to_string(),
            };
        }
        EncodedSignature::Unrecognized {
            raw: raw.to_string(),
        }
    }

    /// Encode back to the stored string form.
    ///
    /// Inverse of [`EncodedSignature::parse`] for the three recognized
    /// variants; `Unrecognized` gives back the stored value unchanged.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

/// Split a `style:` payload into name and style index.
///
/// The index is the last colon-separated segment when that segment is an
/// integer; everything before it is the name, so names containing
/// literal colons survive a round trip. A payload without an integer
/// tail is all name at index 0, and a negative index clamps to 0.
fn parse_styled(payload: &str) -> EncodedSignature {
    if let Some((name, tail)) = payload.rsplit_once(':') {
        if let Ok(index) = tail.parse::<i64>() {
            return EncodedSignature::Styled {
                name: name.to_string(),
                style_index: usize::try_from(index).unwrap_or(0),
            };
        }
    }
    EncodedSignature::Styled {
        name: payload.to_string(),
        style_index: 0,
    }
}

impl fmt::Display for EncodedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodedSignature::Typed { name } => write!(f, "{}{}", TYPED_PREFIX, name),
            EncodedSignature::Styled { name, style_index } => {
                write!(f, "{}{}:{}", STYLE_PREFIX, name, style_index)
            }
            EncodedSignature::Drawn { image_data } => write!(f, "{}{}", DRAWN_PREFIX, image_data),
            EncodedSignature::Unrecognized { raw } => write!(f, "{}", raw),
        }
    }
}

impl From<&str> for EncodedSignature {
    fn from(raw: &str) -> Self {
        EncodedSignature::parse(raw)
    }
}

impl From<String> for EncodedSignature {
    fn from(raw: String) -> Self {
        EncodedSignature::parse(&raw)
    }
}

impl From<EncodedSignature> for String {
    fn from(signature: EncodedSignature) -> Self {
        signature.to_string()
    }
}
