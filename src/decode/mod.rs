// SPDX-License-Identifier: MIT

//! Wire-format decoders for upstream responses.
//!
//! The upstream API answers in JSON, XML, or iCal depending on the `Accept`
//! header. Each decoder turns raw text into `serde_json`-friendly values so
//! handlers can return them directly.

pub mod ical;
pub mod xml;

use crate::error::AppError;
use serde_json::Value;

/// Decode a JSON response body. Passthrough aside from error mapping.
pub fn json(text: &str) -> Result<Value, AppError> {
    serde_json::from_str(text).map_err(|e| AppError::Decode(format!("malformed JSON: {}", e)))
}
