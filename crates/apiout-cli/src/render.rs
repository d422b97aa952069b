// Rust guideline compliant 2026-10-16

//! Rendering of recorded responses as HTTP/1.1 text.

use anyhow::{Context, Result};
use http::Response;
use serde_json::Value;

/// Renders a response as status line, headers, blank line and body.
///
/// # Arguments
///
/// * `response` - The response to render
/// * `pretty` - Re-indent a JSON body for reading
///
/// # Returns
///
/// The rendered response text.
pub fn render_response(response: &Response<Vec<u8>>, pretty: bool) -> String {
    let status = response.status();
    let mut out = format!(
        "HTTP/1.1 {} {}\r\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    );

    for (name, value) in response.headers() {
        out.push_str(&format!(
            "{}: {}\r\n",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }
    out.push_str("\r\n");

    let body = String::from_utf8_lossy(response.body());
    if pretty {
        match serde_json::from_slice::<Value>(response.body())
            .and_then(|value| serde_json::to_string_pretty(&value))
        {
            Ok(text) => out.push_str(&text),
            Err(_) => out.push_str(&body),
        }
    } else {
        out.push_str(&body);
    }
    out.push('\n');
    out
}

/// Parses an optional `--data` argument as JSON.
///
/// # Errors
///
/// Returns an error if the argument is present but is not valid JSON.
pub fn parse_data(raw: Option<&str>) -> Result<Option<Value>> {
    raw.map(|text| {
        serde_json::from_str(text).with_context(|| format!("--data is not valid JSON: {text}"))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_render_plain() {
        let mut response = Response::new(b"{\"OK\":true}".to_vec());
        *response.status_mut() = StatusCode::CREATED;
        response.headers_mut().insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json; charset=UTF-8"),
        );

        let text = render_response(&response, false);
        assert_eq!(
            text,
            "HTTP/1.1 201 Created\r\ncontent-type: application/json; charset=UTF-8\r\n\r\n{\"OK\":true}\n"
        );
    }

    #[test]
    fn test_render_pretty_falls_back_on_non_json() {
        let response = Response::new(b"not json".to_vec());
        let text = render_response(&response, true);
        assert!(text.ends_with("\r\n\r\nnot json\n"));
    }

    #[test]
    fn test_parse_data() {
        assert_eq!(parse_data(None).unwrap(), None);
        assert_eq!(parse_data(Some("42")).unwrap(), Some(Value::from(42)));
        let err = parse_data(Some("{oops")).unwrap_err();
        assert!(err.to_string().contains("--data is not valid JSON"));
    }
}
