//! Signature rendering for the document history panel
//!
//! Decodes stored signature strings and reproduces the presentation they
//! were captured with: plain text for typed names, a catalog style for
//! styled names, an inline image for drawings. Everything here is a pure
//! function over the stored value and the shared catalog; a malformed
//! row renders as a fixed fallback label instead of failing, so one bad
//! value never takes down a list of good ones.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ramsign_types::{resolve_style, EncodedSignature, SignatureRecord, SignatureStyle};

/// Label shown for stored values with no recognized format
pub const UNKNOWN_FORMAT_LABEL: &str = "Unknown signature format";

/// A decoded signature ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedSignature {
    /// The signer's typed name, shown as plain emphasized text
    PlainText { name: String },
    /// The signer's typed name under a catalog presentation style
    StyledText { name: String, style: SignatureStyle },
    /// An inline image; `src` is a complete data URI
    Image { src: String },
    /// Unrecognized stored value; show the fixed label
    Fallback { label: &'static str },
}

/// Reproduce the presentation of a stored signature.
///
/// Pure: no state between calls, safe to run over any number of rows.
/// A `style:` index out of catalog range falls back to the first entry;
/// an unrecognized value becomes [`RenderedSignature::Fallback`].
pub fn render(signature: &EncodedSignature, catalog: &[SignatureStyle]) -> RenderedSignature {
    match signature {
        EncodedSignature::Typed { name } => RenderedSignature::PlainText { name: name.clone() },
        EncodedSignature::Styled { name, style_index } => {
            match resolve_style(catalog, *style_index) {
                Some(style) => RenderedSignature::StyledText {
                    name: name.clone(),
                    style: *style,
                },
                None => RenderedSignature::Fallback {
                    label: UNKNOWN_FORMAT_LABEL,
                },
            }
        }
        EncodedSignature::Drawn { image_data } => RenderedSignature::Image {
            src: image_data.clone(),
        },
        EncodedSignature::Unrecognized { .. } => RenderedSignature::Fallback {
            label: UNKNOWN_FORMAT_LABEL,
        },
    }
}

/// Decode and render a raw stored string in one step
pub fn render_raw(raw: &str, catalog: &[SignatureStyle]) -> RenderedSignature {
    render(&EncodedSignature::parse(raw), catalog)
}

/// One row of the signature history panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureListEntry {
    pub signer_name: String,
    pub signer_email: String,
    pub signed_at: DateTime<Utc>,
    pub rendered: RenderedSignature,
}

/// Render stored signatures for display, keeping store order (most
/// recent first). A malformed row becomes a fallback entry without
/// disturbing its neighbors.
pub fn render_audit_list(
    records: &[SignatureRecord],
    catalog: &[SignatureStyle],
) -> Vec<SignatureListEntry> {
    records
        .iter()
        .map(|record| SignatureListEntry {
            signer_name: record.signer_name.clone(),
            signer_email: record.signer_email.clone(),
            signed_at: record.signed_at,
            rendered: render(&record.signature_data, catalog),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ramsign_types::SIGNATURE_STYLES;

    #[test]
    fn test_typed_renders_as_plain_text() {
        assert_eq!(
            render_raw("typed:Jane Doe", &SIGNATURE_STYLES),
            RenderedSignature::PlainText {
                name: "Jane Doe".to_string()
            }
        );
    }

    #[test]
    fn test_styled_renders_under_catalog_style() {
        let rendered = render_raw("style:Jane Doe:2", &SIGNATURE_STYLES);
        assert_eq!(
            rendered,
            RenderedSignature::StyledText {
                name: "Jane Doe".to_string(),
                style: SIGNATURE_STYLES[2],
            }
        );
    }

    #[test]
    fn test_styled_out_of_range_uses_first_style() {
        let rendered = render_raw("style:Jane Doe:9", &SIGNATURE_STYLES);
        assert_eq!(
            rendered,
            RenderedSignature::StyledText {
                name: "Jane Doe".to_string(),
                style: SIGNATURE_STYLES[0],
            }
        );
    }

    #[test]
    fn test_styled_non_numeric_index_uses_first_style() {
        let rendered = render_raw("style:Jane:Doe", &SIGNATURE_STYLES);
        assert_eq!(
            rendered,
            RenderedSignature::StyledText {
                name: "Jane:Doe".to_string(),
                style: SIGNATURE_STYLES[0],
            }
        );
    }

    #[test]
    fn test_drawn_passes_data_uri_through() {
        let rendered = render_raw("drawn:data:image/png;base64,AAAA", &SIGNATURE_STYLES);
        assert_eq!(
            rendered,
            RenderedSignature::Image {
                src: "data:image/png;base64,AAAA".to_string()
            }
        );
    }

    #[test]
    fn test_unrecognized_renders_fixed_fallback() {
        assert_eq!(
            render_raw("initials:JD", &SIGNATURE_STYLES),
            RenderedSignature::Fallback {
                label: "Unknown signature format"
            }
        );
        assert_eq!(
            render_raw("", &SIGNATURE_STYLES),
            RenderedSignature::Fallback {
                label: UNKNOWN_FORMAT_LABEL
            }
        );
    }

    #[test]
    fn test_styled_against_empty_catalog_falls_back() {
        assert_eq!(
            render_raw("style:Jane Doe:1", &[]),
            RenderedSignature::Fallback {
                label: UNKNOWN_FORMAT_LABEL
            }
        );
    }

    #[test]
    fn test_rendered_serializes_with_kind_tag() {
        let rendered = render_raw("typed:Jane Doe", &SIGNATURE_STYLES);
        let value = serde_json::to_value(&rendered).unwrap();
        assert_eq!(value["kind"], "plain_text");
        assert_eq!(value["name"], "Jane Doe");

        let styled = render_raw("style:Jane Doe:1", &SIGNATURE_STYLES);
        let value = serde_json::to_value(&styled).unwrap();
        assert_eq!(value["kind"], "styled_text");
        assert_eq!(value["style"]["class"], "font-bold text-gray-800");
    }
}
