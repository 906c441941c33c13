//! Signature capture for RAMS documents
//!
//! Collects one signature per signing session in one of three modes:
//! a typed name, a typed name under a catalog style, or a freehand
//! drawing on an owned raster surface. The committed result is a single
//! [`ramsign_types::EncodedSignature`]; persistence and rendering live
//! elsewhere.

pub mod error;
pub mod pad;
pub mod session;
pub mod surface;

pub use error::{CaptureError, SubmitError};
pub use pad::{CaptureMode, SignaturePad};
pub use session::SigningSession;
pub use surface::{DrawingSurface, Point, SURFACE_HEIGHT, SURFACE_WIDTH};
