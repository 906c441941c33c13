//! Persistence boundary for captured signatures
//!
//! The dashboard hands committed signatures to an external backend and
//! reads them back for the history panel. [`SignatureStore`] is that
//! boundary; [`MemoryStore`] is the in-process implementation used by
//! tests and demos.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::record::{NewSignature, SignatureRecord};

/// Errors surfaced by a signature store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No signer profile registered for user: {0}")]
    SignerNotFound(String),

    #[error("Signature store unavailable: {0}")]
    Unavailable(String),
}

/// Where committed signatures go, and where the history panel reads from
pub trait SignatureStore {
    /// Persist one committed signature, stamping its id and signing time.
    /// Called exactly once per successful commit.
    fn persist(&self, signature: NewSignature) -> Result<SignatureRecord, StoreError>;

    /// All signatures for a document, most recent first, with the
    /// signer's profile fields joined in.
    fn list_for_document(&self, document_id: &str) -> Result<Vec<SignatureRecord>, StoreError>;
}

/// Profile fields joined onto stored signatures
#[derive(Debug, Clone)]
struct SignerProfile {
    name: String,
    email: String,
}

/// In-memory signature store keyed by registered signer profiles
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<String, SignerProfile>>,
    records: Mutex<Vec<SignatureRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the profile joined onto this user's signatures.
    /// Persisting for an unregistered user fails with `SignerNotFound`.
    pub fn register_signer(&self, user_id: &str, name: &str, email: &str) {
        let mut profiles = self.profiles.lock().unwrap_or_else(PoisonError::into_inner);
        profiles.insert(
            user_id.to_string(),
            SignerProfile {
                name: name.to_string(),
                email: email.to_string(),
            },
        );
    }
}

impl SignatureStore for MemoryStore {
    fn persist(&self, signature: NewSignature) -> Result<SignatureRecord, StoreError> {
        let profiles = self.profiles.lock().unwrap_or_else(PoisonError::into_inner);
        let profile = profiles
            .get(&signature.user_id)
            .ok_or_else(|| StoreError::SignerNotFound(signature.user_id.clone()))?;

        let record = SignatureRecord {
            id: Uuid::new_v4(),
            document_id: signature.document_id,
            signature_data: signature.signature_data,
            signed_at: Utc::now(),
            signer_name: profile.name.clone(),
            signer_email: profile.email.clone(),
        };

        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.push(record.clone());
        Ok(record)
    }

    fn list_for_document(&self, document_id: &str) -> Result<Vec<SignatureRecord>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        // Insertion order follows signing time, so newest is last
        Ok(records
            .iter()
            .filter(|record| record.document_id == document_id)
            .rev()
            .cloned()
            .collect())
    }
}
