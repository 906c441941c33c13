//! The fixed signature style catalog
//!
//! Four presentation styles, shared by the capture preview and the
//! historical render path. Order is significant: the index is persisted
//! inside `style:` signatures and must resolve to the same entry
//! indefinitely. Never reorder or remove entries.

use serde::Serialize;

/// A fixed visual presentation for a typed-name signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignatureStyle {
    /// Position in the catalog, persisted inside `style:` signatures
    pub index: usize,
    /// Name shown in the style picker
    pub name: &'static str,
    /// Opaque presentation token (CSS utility classes in the dashboard)
    pub class: &'static str,
}

/// The signature style catalog
pub const SIGNATURE_STYLES: [SignatureStyle; 4] = [
    SignatureStyle {
        index: 0,
        name: "Classic Script",
        class: "font-serif italic text-blue-900",
    },
    SignatureStyle {
        index: 1,
        name: "Bold Print",
        class: "font-bold text-gray-800",
    },
    SignatureStyle {
        index: 2,
        name: "Modern",
        class: "font-mono text-green-800",
    },
    SignatureStyle {
        index: 3,
        name: "Elegant",
        class: "font-cursive text-purple-800",
    },
];

/// Resolve a persisted style index against a catalog.
///
/// Stored indices are untrusted: anything out of range falls back to the
/// first entry so old rows keep rendering after catalog growth or bad
/// data. Returns `None` only for an empty catalog.
pub fn resolve_style(catalog: &[SignatureStyle], index: usize) -> Option<&SignatureStyle> {
    catalog.get(index).or_else(|| catalog.first())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any index resolves against the shared catalog
        #[test]
        fn any_index_resolves(index in any::<usize>()) {
            prop_assert!(resolve_style(&SIGNATURE_STYLES, index).is_some());
        }

        /// Property: in-range indices resolve to their own entry
        #[test]
        fn in_range_resolves_to_same_entry(index in 0usize..4) {
            let style = resolve_style(&SIGNATURE_STYLES, index).unwrap();
            prop_assert_eq!(style.index, index);
        }

        /// Property: out-of-range indices resolve to the first entry
        #[test]
        fn out_of_range_resolves_to_first(index in 4usize..10_000) {
            let style = resolve_style(&SIGNATURE_STYLES, index).unwrap();
            prop_assert_eq!(style.index, 0);
        }
    }
}
