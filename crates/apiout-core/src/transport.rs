// Rust guideline compliant 2026-10-16

//! Transport abstraction the dispatcher writes responses through.
//!
//! The dispatcher only needs three capabilities from an HTTP server binding:
//! set a header, write the status code once, and write the body bytes. It
//! calls them in that order.

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Response, StatusCode};
use std::io;

/// `Content-Type` value set on every envelope response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Minimal response sink owned by a single request-handling flow.
pub trait ResponseWriter {
    /// Sets a response header, replacing any previous value.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Writes the status code. Called at most once per response.
    fn write_status(&mut self, status: StatusCode);

    /// Writes body bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink rejects the bytes.
    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

/// Builds an `http::Response` in place.
impl ResponseWriter for Response<Vec<u8>> {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.body_mut().extend_from_slice(body);
        Ok(())
    }
}

/// In-memory writer that records everything written to it.
///
/// Useful in tests and for rendering responses outside a server.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    /// Headers set so far.
    pub headers: HeaderMap,
    /// Status code, if one was written.
    pub status: Option<StatusCode>,
    /// Body bytes written so far.
    pub body: Vec<u8>,
    /// Number of calls made through [`ResponseWriter`].
    pub calls: usize,
}

impl MemoryWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when nothing at all has been written.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.calls == 0
    }

    /// Returns the `Content-Type` header, if set and valid UTF-8.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Returns the body as UTF-8 text, replacing invalid sequences.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Converts the recorded response into an `http::Response`.
    ///
    /// A missing status becomes `200 OK`, matching what most servers send
    /// when a handler never sets one.
    #[must_use]
    pub fn into_response(self) -> Response<Vec<u8>> {
        let mut response = Response::new(self.body);
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseWriter for MemoryWriter {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.calls += 1;
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        self.calls += 1;
        self.status = Some(status);
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.calls += 1;
        self.body.extend_from_slice(body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::CONTENT_TYPE;

    #[test]
    fn test_memory_writer_records_calls() {
        let mut writer = MemoryWriter::new();
        assert!(writer.is_untouched());

        writer.set_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        writer.write_status(StatusCode::CREATED);
        writer.write_body(b"{}").unwrap();

        assert_eq!(writer.calls, 3);
        assert_eq!(writer.content_type(), Some(JSON_CONTENT_TYPE));
        assert_eq!(writer.status, Some(StatusCode::CREATED));
        assert_eq!(writer.body_text(), "{}");
    }

    #[test]
    fn test_http_response_binding() {
        let mut response = Response::new(Vec::new());
        response.set_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        response.write_status(StatusCode::NOT_FOUND);
        response.write_body(b"{\"OK\":false}").unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(response.body().as_slice(), b"{\"OK\":false}");
    }

    #[test]
    fn test_into_response_defaults_status() {
        let response = MemoryWriter::new().into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().is_empty());
    }
}
