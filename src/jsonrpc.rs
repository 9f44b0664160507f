//! https://www.jsonrpc.org/specification

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const VERSION: &str = "2.0";

/// The request body was not a well-formed envelope.
pub const PARSE_ERROR: i64 = -32700;
/// No endpoint could serve the request.
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Request {
    pub jsonrpc: String, // jsonrpc must be "2.0"
    pub method: String,  // A String containing the name of the method to be invoked.
    #[serde(default)]
    pub params: Vec<Value>, // Parameter values to be used during the invocation of the method.
    #[serde(default)]
    pub id: Value, // An identifier established by the Client: a String, Number, or NULL.
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Response {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
    #[serde(default)]
    pub id: Value, // echoes the request id, null when it could not be read
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Error {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Response {
    /// Envelope for an error the relay itself produced.
    pub fn from_error(error: Error, id: Value) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

impl Error {
    pub fn parse_error() -> Self {
        Self {
            code: PARSE_ERROR,
            message: "Parse error".to_string(),
            data: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message: message.into(),
            data: None,
        }
    }
}

/// Strict decode of an inbound request body.
pub fn decode_request(bytes: &[u8]) -> crate::Result<Request> {
    serde_json::from_slice(bytes).map_err(crate::Error::Decode)
}

pub fn encode<T: Serialize>(value: &T) -> crate::Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(crate::Error::Encode)
}
