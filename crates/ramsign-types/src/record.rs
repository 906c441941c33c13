//! Persisted signature rows
//!
//! Shapes of the `document_signatures` table: what the capture side
//! hands to the store, and what the history panel reads back with the
//! signer's profile joined in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::encoding::EncodedSignature;

/// A committed signature ready to persist, before the store stamps
/// its id and signing time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSignature {
    pub document_id: String,
    pub user_id: String,
    pub signature_data: EncodedSignature,
}

/// A stored signature row, joined with the signer's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub id: Uuid,
    pub document_id: String,
    pub signature_data: EncodedSignature,
    pub signed_at: DateTime<Utc>,
    pub signer_name: String,
    pub signer_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_json_round_trip() {
        let record = SignatureRecord {
            id: Uuid::new_v4(),
            document_id: "rams-42".to_string(),
            signature_data: EncodedSignature::Typed {
                name: "Jane Doe".to_string(),
            },
            signed_at: Utc::now(),
            signer_name: "Jane Doe".to_string(),
            signer_email: "jane@site.example".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: SignatureRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_signature_data_serializes_as_tagged_string() {
        let new_signature = NewSignature {
            document_id: "rams-42".to_string(),
            user_id: "user-7".to_string(),
            signature_data: EncodedSignature::Styled {
                name: "Jane Doe".to_string(),
                style_index: 1,
            },
        };

        let value = serde_json::to_value(&new_signature).unwrap();
        assert_eq!(value["signature_data"], "style:Jane Doe:1");
    }
}
