//! Shared types for the RAMS signature subsystem
//!
//! The capture component and the rendering component couple only through
//! this crate: the persisted signature encoding, the fixed style catalog,
//! the stored record shapes, and the persistence boundary trait.

pub mod catalog;
pub mod encoding;
pub mod record;
pub mod store;

pub use catalog::{resolve_style, SignatureStyle, SIGNATURE_STYLES};
pub use encoding::EncodedSignature;
pub use record::{NewSignature, SignatureRecord};
pub use store::{MemoryStore, SignatureStore, StoreError};
