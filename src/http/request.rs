/// HTTP request methods the parser recognizes.
///
/// Only GET is actually served; PUT and DELETE are parsed but answered
/// with 405 Method Not Allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// PUT - Replace a resource (parsed, not implemented)
    PUT,
    /// DELETE - Delete a resource (parsed, not implemented)
    DELETE,
}

/// A parsed view of one client message.
///
/// Holds only what the server acts on: the method token and the URI token
/// from the request line. The URI is kept verbatim as received — no
/// normalization, no percent-decoding. Created per connection, discarded
/// after one response.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method, or `None` when the token matched no known method.
    pub method: Option<Method>,
    /// The request target exactly as the client sent it (e.g. "/index.html")
    pub uri: String,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a known method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use shoal::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    }

    /// Returns the method's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}
