//! Decodes raw signaling frames into [`SignalMessage`] values.
//!
//! Decoding is two-stage: the frame must parse as JSON at all
//! ([`DecodeError::MalformedPayload`] otherwise), and the resulting object
//! must match the envelope shape for its `msgType`
//! ([`DecodeError::SchemaViolation`] otherwise). The `data` payload of
//! `candidate`/`sdp` frames is opaque and never inspected.

use crate::model::SignalMessage;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("schema violation: {0}")]
    SchemaViolation(String),
}

pub fn decode(raw: &str) -> Result<SignalMessage, DecodeError> {
    let value: Value = serde_json::from_str(raw)?;
    let msg: SignalMessage = serde_json::from_value(value)
        .map_err(|e| DecodeError::SchemaViolation(e.to_string()))?;
    validate(&msg)?;
    Ok(msg)
}

fn validate(msg: &SignalMessage) -> Result<(), DecodeError> {
    match msg {
        SignalMessage::Join { .. } => Ok(()),
        SignalMessage::JoinAck { data, err, .. } => {
            if data.is_none() && err.is_none() {
                return Err(DecodeError::SchemaViolation(
                    "join_ack requires 'data' or 'err'".to_string(),
                ));
            }
            Ok(())
        }
        SignalMessage::Candidate { to, .. } => require_to(to, "candidate"),
        SignalMessage::Sdp { to, .. } => require_to(to, "sdp"),
    }
}

fn require_to<T>(to: &Option<T>, kind: &str) -> Result<(), DecodeError> {
    if to.is_none() {
        return Err(DecodeError::SchemaViolation(format!(
            "{kind} requires 'to'"
        )));
    }
    Ok(())
}
