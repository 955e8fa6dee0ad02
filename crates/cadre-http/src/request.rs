//! HTTP request type.
//!
//! [`HttpRequest`] is the ambient request context supplied by the transport
//! layer: it carries the method and path the matcher needs, plus the query
//! string and headers, and is itself injectable into controller actions by
//! the argument binder.

use std::borrow::Cow;

use http::{HeaderMap, Method};
use percent_encoding::percent_decode_str;

/// An HTTP request as seen by the routing engine.
///
/// Instances are created by the transport layer; in tests and examples use
/// the builder.
///
/// # Examples
///
/// ```
/// use cadre_http::HttpRequest;
///
/// let request = HttpRequest::builder()
///     .method(http::Method::GET)
///     .path("/item/42")
///     .query_string("page=1&page=2&q=caf%C3%A9")
///     .build();
///
/// assert_eq!(request.method(), &http::Method::GET);
/// assert_eq!(request.path(), "/item/42");
/// assert_eq!(request.query_param("page"), Some("2"));
/// assert_eq!(request.query_param("q"), Some("café"));
/// ```
#[derive(Debug)]
pub struct HttpRequest {
    method: Method,
    path: String,
    query_string: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new [`HttpRequestBuilder`].
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }

    /// The HTTP method.
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, without the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw query string (no leading `?`).
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// The request headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The last value for a query parameter, decoded.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All values for a query parameter, decoded, in order of appearance.
    pub fn query_params(&self, name: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// Builder for [`HttpRequest`]. Defaults to `GET /`.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: Method,
    path: String,
    query_string: String,
    headers: HeaderMap,
}

impl Default for HttpRequestBuilder {
    fn default() -> Self {
        Self {
            method: Method::GET,
            path: "/".to_string(),
            query_string: String::new(),
            headers: HeaderMap::new(),
        }
    }
}

impl HttpRequestBuilder {
    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the request path. A query string after `?` is split off into the
    /// query string automatically.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if let Some((path, query)) = path.split_once('?') {
            self.query_string = query.to_string();
            self.path = path.to_string();
        } else {
            self.path = path;
        }
        self
    }

    /// Sets the query string (no leading `?`).
    #[must_use]
    pub fn query_string(mut self, query_string: impl Into<String>) -> Self {
        self.query_string = query_string.into();
        self
    }

    /// Adds a header. Invalid names or values are silently dropped.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<http::header::HeaderName>(),
            value.parse::<http::header::HeaderValue>(),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Builds the request, parsing the query string.
    pub fn build(self) -> HttpRequest {
        let query = parse_query_string(&self.query_string);
        HttpRequest {
            method: self.method,
            path: self.path,
            query_string: self.query_string,
            headers: self.headers,
            query,
        }
    }
}

/// Parses a URL query string into decoded key/value pairs, preserving order
/// and duplicate keys. `+` decodes as a space.
fn parse_query_string(query_string: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for pair in query_string.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .map_or((pair, ""), |(k, v)| (k, v));
        pairs.push((decode_component(key), decode_component(value)));
    }
    pairs
}

fn decode_component(raw: &str) -> String {
    let unplussed: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    percent_decode_str(&unplussed).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = HttpRequest::builder().build();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/");
        assert_eq!(request.query_string(), "");
    }

    #[test]
    fn test_path_splits_query_string() {
        let request = HttpRequest::builder().path("/item/42?page=2").build();
        assert_eq!(request.path(), "/item/42");
        assert_eq!(request.query_string(), "page=2");
        assert_eq!(request.query_param("page"), Some("2"));
    }

    #[test]
    fn test_query_multi_values() {
        let request = HttpRequest::builder()
            .query_string("color=red&color=blue&size=large")
            .build();
        assert_eq!(request.query_param("color"), Some("blue"));
        assert_eq!(request.query_params("color"), vec!["red", "blue"]);
        assert_eq!(request.query_param("size"), Some("large"));
        assert_eq!(request.query_param("missing"), None);
    }

    #[test]
    fn test_query_decoding() {
        let request = HttpRequest::builder()
            .query_string("q=caf%C3%A9&msg=hello+world&flag")
            .build();
        assert_eq!(request.query_param("q"), Some("café"));
        assert_eq!(request.query_param("msg"), Some("hello world"));
        assert_eq!(request.query_param("flag"), Some(""));
    }

    #[test]
    fn test_headers() {
        let request = HttpRequest::builder()
            .header("x-requested-with", "XMLHttpRequest")
            .build();
        assert_eq!(
            request.headers().get("x-requested-with").unwrap(),
            "XMLHttpRequest"
        );
    }
}
