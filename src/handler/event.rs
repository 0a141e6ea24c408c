use std::collections::{BTreeMap, HashMap};

use axum::http::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
const CONTENT_TYPE: &str = "Content-Type";

/// What the runtime hands to a single invocation.
///
/// Field names follow the gateway's camelCase JSON. Everything is optional;
/// a missing method means `GET`, a missing body means `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    // carried through, never inspected
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl Event {
    pub fn new(method: impl Into<String>) -> Self {
        Event {
            http_method: Some(method.into()),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert("path".to_string(), path.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// `None` if the method is not a valid HTTP token.
    pub fn method(&self) -> Option<Method> {
        let method = self.http_method.as_deref().unwrap_or("GET");
        Method::from_bytes(method.as_bytes()).ok()
    }

    /// The `path` selector, empty when absent.
    pub fn path(&self) -> &str {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get("path"))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("{}")
    }
}

/// What an invocation hands back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl Reply {
    /// CORS preflight grant. The store is never touched for this.
    pub fn preflight() -> Self {
        let headers = [
            (ALLOW_ORIGIN, "*"),
            (
                "Access-Control-Allow-Methods",
                "GET, POST, PUT, DELETE, OPTIONS",
            ),
            ("Access-Control-Allow-Headers", "Content-Type, X-Admin-Key"),
            ("Access-Control-Max-Age", "86400"),
        ];
        Reply {
            status_code: StatusCode::OK.as_u16(),
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn json<T: Serialize + ?Sized>(
        status: StatusCode,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::with_body(status, serde_json::to_string(value)?))
    }

    pub fn invalid_route() -> Self {
        Self::error(StatusCode::BAD_REQUEST, "Invalid path or method")
    }

    pub fn error(status: StatusCode, message: impl AsRef<str>) -> Self {
        Self::with_body(status, json!({ "error": message.as_ref() }).to_string())
    }

    fn with_body(status: StatusCode, body: String) -> Self {
        let headers = [(CONTENT_TYPE, "application/json"), (ALLOW_ORIGIN, "*")];
        Reply {
            status_code: status.as_u16(),
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
            is_base64_encoded: false,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_event() {
        let event: Event = serde_json::from_str(
            r#"{
                "httpMethod": "POST",
                "queryStringParameters": {"path": "album"},
                "headers": {"X-Admin-Key": "hunter2"},
                "body": "{\"title\": \"X\"}",
                "isBase64Encoded": false,
                "requestContext": {"requestId": "abc"}
            }"#,
        )
        .unwrap();
        assert_eq!(event.method(), Some(Method::POST));
        assert_eq!(event.path(), "album");
        assert_eq!(event.body(), r#"{"title": "X"}"#);
    }

    #[test]
    fn sparse_event_defaults() {
        let event: Event =
            serde_json::from_str(r#"{"queryStringParameters": null, "body": null}"#).unwrap();
        assert_eq!(event.method(), Some(Method::GET));
        assert_eq!(event.path(), "");
        assert_eq!(event.body(), "{}");
    }

    #[test]
    fn bogus_method() {
        assert_eq!(Event::new("GE T").method(), None);
    }

    #[test]
    fn reply_wire_format() {
        let reply = Reply::invalid_route();
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 400,
                "headers": {
                    "Access-Control-Allow-Origin": "*",
                    "Content-Type": "application/json"
                },
                "body": "{\"error\":\"Invalid path or method\"}",
                "isBase64Encoded": false
            })
        );
    }

    #[test]
    fn preflight_headers() {
        let reply = Reply::preflight();
        assert_eq!(reply.status_code, 200);
        assert!(reply.body.is_empty());
        assert_eq!(reply.headers.len(), 4);
        assert_eq!(reply.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(
            reply.header("Access-Control-Allow-Methods"),
            Some("GET, POST, PUT, DELETE, OPTIONS")
        );
        assert_eq!(
            reply.header("Access-Control-Allow-Headers"),
            Some("Content-Type, X-Admin-Key")
        );
        assert_eq!(reply.header("Access-Control-Max-Age"), Some("86400"));
        assert_eq!(reply.header("Content-Type"), None);
    }
}
