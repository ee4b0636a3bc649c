//! Core data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreResult, ValidationError};
use crate::time::parse_timestamp;
use crate::validation::validate_transaction;

/// A transfer of `a` from `p1` (sender) to `p2` (receiver) at time `t`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender
    pub p1: String,
    /// Receiver
    pub p2: String,
    /// ISO-8601 timestamp, kept exactly as submitted
    pub t: String,
    /// Amount, always > 0
    pub a: f64,
    /// Fields outside the core set, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    /// Validate a decoded request body and build a transaction from it
    ///
    /// Runs `validate_transaction`, so `a` is coerced before conversion and
    /// every field outside the core set ends up in `extra`.
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self, ValidationError> {
        validate_transaction(&mut payload)?;

        serde_json::from_value(Value::Object(payload)).map_err(|e| ValidationError::InvalidField {
            message: e.to_string(),
        })
    }

    /// Parsed timestamp
    pub fn timestamp(&self) -> CoreResult<DateTime<Utc>> {
        parse_timestamp(&self.t)
    }

    /// Whether `person` sent or received this transaction
    pub fn involves(&self, person: &str) -> bool {
        self.p1 == person || self.p2 == person
    }
}
