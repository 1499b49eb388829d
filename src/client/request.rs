//! 请求描述：方法、路径、查询参数、请求头与请求体。
//!
//! Request descriptor, built fresh for every call.

use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

/// One query parameter. Order is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    /// Serialized as a bare key: `?ocr`
    Flag(String),
    /// Serialized as `key=value`
    Pair(String, String),
}

/// Request body. A request carries JSON or raw bytes, never both.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// Sent as-is; the default JSON content type is not applied.
    Raw(Bytes),
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Relative to the configured base address.
    pub path: String,
    pub query: Vec<QueryParam>,
    /// Merged over the client's default headers; these win on conflict.
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn head(path: impl Into<String>) -> Self {
        Self::new(Method::HEAD, path)
    }

    /// Append a value-less query parameter.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.query.push(QueryParam::Flag(name.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push(QueryParam::Pair(name.into(), value.into()));
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn content_type(self, mime: &'static str) -> Self {
        self.header(CONTENT_TYPE, HeaderValue::from_static(mime))
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn raw(mut self, body: impl Into<Bytes>) -> Self {
        self.body = RequestBody::Raw(body.into());
        self
    }
}

/// Joins `base_url` and `path` with exactly one `/` and appends `query` in order.
pub fn build_url(base_url: &str, path: &str, query: &[QueryParam]) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let mut url = Url::parse(&joined).map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid request URL {}: {}", joined, e),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_source("request_builder"),
        )
    })?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for param in query {
            match param {
                QueryParam::Flag(name) => pairs.append_key_only(name),
                QueryParam::Pair(name, value) => pairs.append_pair(name, value),
            };
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_normalizes_slashes() {
        let cases = [
            ("http://test-api.com", "/test", "http://test-api.com/test"),
            ("http://test-api.com/", "test", "http://test-api.com/test"),
            ("http://test-api.com/", "/test", "http://test-api.com/test"),
            ("http://test-api.com", "", "http://test-api.com/"),
            (
                "http://localhost:8080/prefix",
                "atom/pdf",
                "http://localhost:8080/prefix/atom/pdf",
            ),
        ];
        for (base, path, expected) in cases {
            assert_eq!(build_url(base, path, &[]).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn test_flag_is_serialized_bare() {
        let url = build_url(
            "http://test-api.com",
            "atom/pdf",
            &[QueryParam::Flag("ocr".into())],
        )
        .unwrap();
        assert_eq!(url.as_str(), "http://test-api.com/atom/pdf?ocr");
    }

    #[test]
    fn test_pairs_then_flags_keep_order() {
        let url = build_url(
            "http://test-api.com",
            "search",
            &[
                QueryParam::Pair("filter".into(), "a b".into()),
                QueryParam::Flag("verbose".into()),
            ],
        )
        .unwrap();
        assert_eq!(url.query(), Some("filter=a+b&verbose"));
    }

    #[test]
    fn test_invalid_base_is_configuration_error() {
        let err = build_url("not a url", "x", &[]).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_builder_helpers() {
        let req = ApiRequest::post("atom/pdf")
            .flag("ocr")
            .content_type("application/pdf")
            .raw(b"%PDF".to_vec());
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.query, vec![QueryParam::Flag("ocr".into())]);
        assert_eq!(req.headers[CONTENT_TYPE], "application/pdf");
        assert_eq!(req.body, RequestBody::Raw(Bytes::from_static(b"%PDF")));

        // Setting a JSON body replaces the raw one.
        let req = req.json(serde_json::json!({"a": 1}));
        assert!(matches!(req.body, RequestBody::Json(_)));
    }
}
