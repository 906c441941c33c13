//! Signature capture state
//!
//! One [`SignaturePad`] collects exactly one signature in one of three
//! modes. Mode switches keep sibling-mode state: typed text and laid ink
//! both survive switching away and back, until cleared or the pad is
//! discarded. Stroke input is an explicit Idle/Stroking state machine,
//! so pointer and touch devices feed the same three calls.

use ramsign_types::{EncodedSignature, SignatureStyle, SIGNATURE_STYLES};

use crate::error::CaptureError;
use crate::surface::{DrawingSurface, Point};

/// Signature acquisition mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    /// Type a name, shown as plain text
    #[default]
    Typed,
    /// Draw freehand on the surface
    Drawn,
    /// Type a name, shown under a catalog style
    Styled,
}

/// Stroke input state; ink only accumulates between begin and end
#[derive(Debug, Clone, Copy, PartialEq)]
enum StrokePhase {
    Idle,
    Stroking { last: Point },
}

/// Ephemeral capture state for one signing attempt
pub struct SignaturePad {
    mode: CaptureMode,
    typed_name: String,
    selected_style: usize,
    surface: DrawingSurface,
    stroke: StrokePhase,
    catalog: &'static [SignatureStyle],
}

impl SignaturePad {
    /// A fresh pad in Typed mode, wired to the shared style catalog
    pub fn new() -> Self {
        Self {
            mode: CaptureMode::default(),
            typed_name: String::new(),
            selected_style: 0,
            surface: DrawingSurface::new(),
            stroke: StrokePhase::Idle,
            catalog: &SIGNATURE_STYLES,
        }
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn typed_name(&self) -> &str {
        &self.typed_name
    }

    pub fn selected_style(&self) -> usize {
        self.selected_style
    }

    /// The shared style catalog, for rendering the style picker
    pub fn catalog(&self) -> &'static [SignatureStyle] {
        self.catalog
    }

    /// Read access to the accumulated drawing
    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    /// Switch acquisition mode. State belonging to other modes is kept;
    /// an in-flight stroke ends where it is.
    pub fn select_mode(&mut self, mode: CaptureMode) {
        self.stroke = StrokePhase::Idle;
        self.mode = mode;
    }

    /// Update the name field shared by Typed and Styled modes
    pub fn set_typed_name(&mut self, text: &str) {
        self.typed_name = text.to_string();
    }

    /// Select a catalog style for Styled mode
    pub fn select_style(&mut self, index: usize) -> Result<(), CaptureError> {
        if index >= self.catalog.len() {
            return Err(CaptureError::StyleOutOfRange(index));
        }
        self.selected_style = index;
        Ok(())
    }

    /// Start a stroke at `point`. Lays no ink by itself; ink appears as
    /// the stroke is extended. A stroke already in flight restarts here.
    pub fn begin_stroke(&mut self, point: Point) {
        self.stroke = StrokePhase::Stroking { last: point };
    }

    /// Extend the current stroke with a connected segment. No-op while
    /// no stroke is in flight.
    pub fn extend_stroke(&mut self, point: Point) {
        if let StrokePhase::Stroking { last } = self.stroke {
            self.surface.draw_segment(last, point);
            self.stroke = StrokePhase::Stroking { last: point };
        }
    }

    /// Finish the current stroke. No-op while no stroke is in flight.
    pub fn end_stroke(&mut self) {
        self.stroke = StrokePhase::Idle;
    }

    /// Blank the drawing surface, discarding every stroke and aborting
    /// any stroke in flight
    pub fn clear_drawing(&mut self) {
        self.stroke = StrokePhase::Idle;
        self.surface.clear();
    }

    /// Whether the active mode has enough input to commit.
    /// Typed and Styled need a name that trims non-empty; Drawn needs
    /// at least one inked pixel.
    pub fn is_ready(&self) -> bool {
        match self.mode {
            CaptureMode::Typed | CaptureMode::Styled => !self.typed_name.trim().is_empty(),
            CaptureMode::Drawn => !self.surface.is_blank(),
        }
    }

    /// Convert the captured input into its persisted form.
    ///
    /// Callers gate on [`SignaturePad::is_ready`]; committing early is
    /// `CaptureError::NotReady`. The pad itself is left untouched, so a
    /// failed hand-off can retry without the user re-entering anything.
    pub fn commit(&self) -> Result<EncodedSignature, CaptureError> {
        if !self.is_ready() {
            return Err(CaptureError::NotReady);
        }

        let encoded = match self.mode {
            CaptureMode::Typed => EncodedSignature::Typed {
                name: self.typed_name.clone(),
            },
            CaptureMode::Styled => EncodedSignature::Styled {
                name: self.typed_name.clone(),
                style_index: self.selected_style,
            },
            CaptureMode::Drawn => EncodedSignature::Drawn {
                image_data: self.surface.to_data_uri()?,
            },
        };

        Ok(encoded)
    }
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SignaturePad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignaturePad")
            .field("mode", &self.mode)
            .field("typed_name", &self.typed_name)
            .field("selected_style", &self.selected_style)
            .field("blank", &self.surface.is_blank())
            .field("stroke", &self.stroke)
            .finish()
    }
}
