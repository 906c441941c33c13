//! Signing session lifecycle
//!
//! Wraps one [`SignaturePad`] with the submit/cancel flow of the signing
//! dialog: capture until a submit sticks, then hold the stored record
//! for the signed view. A failed submit leaves every bit of capture
//! state in place so the user retries without re-entering anything.

use ramsign_types::{NewSignature, SignatureRecord, SignatureStore};

use crate::error::SubmitError;
use crate::pad::SignaturePad;

#[derive(Debug)]
enum SessionState {
    Capturing(SignaturePad),
    Signed(SignatureRecord),
}

/// Drives one signature from capture through persistence
#[derive(Debug)]
pub struct SigningSession {
    document_id: String,
    user_id: String,
    state: SessionState,
}

impl SigningSession {
    /// Open a session for one user signing one document, with a fresh pad
    pub fn new(document_id: &str, user_id: &str) -> Self {
        Self {
            document_id: document_id.to_string(),
            user_id: user_id.to_string(),
            state: SessionState::Capturing(SignaturePad::new()),
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The capture pad, while still capturing
    pub fn pad(&self) -> Option<&SignaturePad> {
        match &self.state {
            SessionState::Capturing(pad) => Some(pad),
            SessionState::Signed(_) => None,
        }
    }

    /// Mutable capture pad, while still capturing
    pub fn pad_mut(&mut self) -> Option<&mut SignaturePad> {
        match &mut self.state {
            SessionState::Capturing(pad) => Some(pad),
            SessionState::Signed(_) => None,
        }
    }

    /// Whether a submit has stuck
    pub fn is_signed(&self) -> bool {
        matches!(self.state, SessionState::Signed(_))
    }

    /// The stored record, once signed
    pub fn record(&self) -> Option<&SignatureRecord> {
        match &self.state {
            SessionState::Signed(record) => Some(record),
            SessionState::Capturing(_) => None,
        }
    }

    /// Commit the pad and persist the result, exactly once.
    ///
    /// On success the session moves to its signed state and capture
    /// state is discarded. On failure the pad stays exactly as it was,
    /// ink and text included.
    pub fn submit(&mut self, store: &dyn SignatureStore) -> Result<SignatureRecord, SubmitError> {
        let pad = match &self.state {
            SessionState::Capturing(pad) => pad,
            SessionState::Signed(_) => return Err(SubmitError::AlreadySigned),
        };

        let signature_data = pad.commit()?;
        let record = match store.persist(NewSignature {
            document_id: self.document_id.clone(),
            user_id: self.user_id.clone(),
            signature_data,
        }) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    "Signature submission failed for document {}: {}",
                    self.document_id,
                    e
                );
                return Err(SubmitError::Store(e));
            }
        };

        tracing::info!(
            "Signature stored for document {} by {}",
            self.document_id,
            record.signer_name
        );

        self.state = SessionState::Signed(record.clone());
        Ok(record)
    }

    /// Close without committing, fully discarding capture state.
    /// The drawing buffer is blanked before the pad is dropped.
    pub fn cancel(mut self) {
        if let SessionState::Capturing(pad) = &mut self.state {
            pad.clear_drawing();
            pad.set_typed_name("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaptureError;
    use crate::pad::CaptureMode;
    use crate::surface::Point;
    use ramsign_types::{EncodedSignature, MemoryStore, SignatureStore, StoreError};

    fn draw_on(session: &mut SigningSession) {
        let pad = session.pad_mut().unwrap();
        pad.select_mode(CaptureMode::Drawn);
        pad.begin_stroke(Point::new(20.0, 20.0));
        pad.extend_stroke(Point::new(120.0, 80.0));
        pad.end_stroke();
    }

    #[test]
    fn test_submit_transitions_to_signed() {
        let store = MemoryStore::new();
        store.register_signer("user-1", "Jane Doe", "jane@site.example");

        let mut session = SigningSession::new("rams-1", "user-1");
        session.pad_mut().unwrap().set_typed_name("Jane Doe");

        let record = session.submit(&store).unwrap();
        assert_eq!(
            record.signature_data,
            EncodedSignature::Typed {
                name: "Jane Doe".to_string()
            }
        );
        assert!(session.is_signed());
        assert!(session.pad().is_none());
        assert_eq!(session.record().map(|r| r.id), Some(record.id));
    }

    #[test]
    fn test_submit_not_ready_is_a_capture_error() {
        let store = MemoryStore::new();
        store.register_signer("user-1", "Jane Doe", "jane@site.example");

        let mut session = SigningSession::new("rams-1", "user-1");
        let result = session.submit(&store);

        assert!(matches!(
            result,
            Err(SubmitError::Capture(CaptureError::NotReady))
        ));
        assert!(!session.is_signed());
    }

    #[test]
    fn test_failed_submit_keeps_capture_state() {
        // No signer registered: the store rejects the first attempt
        let store = MemoryStore::new();

        let mut session = SigningSession::new("rams-1", "user-1");
        draw_on(&mut session);
        session.pad_mut().unwrap().set_typed_name("Jane Doe");

        let result = session.submit(&store);
        assert!(matches!(
            result,
            Err(SubmitError::Store(StoreError::SignerNotFound(_)))
        ));

        // Ink and text both survive the failure
        let pad = session.pad().unwrap();
        assert!(!pad.surface().is_blank());
        assert_eq!(pad.typed_name(), "Jane Doe");

        // Registering the signer makes the manual retry stick
        store.register_signer("user-1", "Jane Doe", "jane@site.example");
        session.submit(&store).unwrap();
        assert!(session.is_signed());
        assert_eq!(store.list_for_document("rams-1").unwrap().len(), 1);
    }

    #[test]
    fn test_second_submit_is_already_signed() {
        let store = MemoryStore::new();
        store.register_signer("user-1", "Jane Doe", "jane@site.example");

        let mut session = SigningSession::new("rams-1", "user-1");
        session.pad_mut().unwrap().set_typed_name("Jane Doe");
        session.submit(&store).unwrap();

        let again = session.submit(&store);
        assert!(matches!(again, Err(SubmitError::AlreadySigned)));

        // Nothing was persisted twice
        assert_eq!(store.list_for_document("rams-1").unwrap().len(), 1);
    }

    #[test]
    fn test_drawn_submit_persists_data_uri() {
        let store = MemoryStore::new();
        store.register_signer("user-1", "Jane Doe", "jane@site.example");

        let mut session = SigningSession::new("rams-1", "user-1");
        draw_on(&mut session);

        let record = session.submit(&store).unwrap();
        match record.signature_data {
            EncodedSignature::Drawn { image_data } => {
                assert!(image_data.starts_with("data:image/png;base64,"));
            }
            other => panic!("expected a drawn signature, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_discards_without_persisting() {
        let store = MemoryStore::new();
        store.register_signer("user-1", "Jane Doe", "jane@site.example");

        let mut session = SigningSession::new("rams-1", "user-1");
        draw_on(&mut session);
        session.cancel();

        assert!(store.list_for_document("rams-1").unwrap().is_empty());
    }
}
