//! Unified response envelope.
//!
//! Every JSON endpoint wraps its payload as `{ "data": ..., "error": ... }`.
//! Invariant: exactly one side is non-null.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { data: Some(data), error: None }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self { data: None, error: Some(message.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_serializes_with_null_error() {
        let env = Envelope::ok(serde_json::json!({ "success": true }));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({ "data": { "success": true }, "error": null }));
    }

    #[test]
    fn err_serializes_with_null_data() {
        let env: Envelope<serde_json::Value> = Envelope::err("Internal server error");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({ "data": null, "error": "Internal server error" }));
    }
}
