use crate::http::request::{Method, Request};

#[derive(Debug)]
pub enum ParseError {
    /// The buffer held no tokens at all.
    Empty,
    /// A method token was present but no URI token followed it.
    MissingUri,
}

/// Extracts the method and URI tokens from one raw request buffer.
///
/// Splits on whitespace: first token is the method name, second is the
/// URI. Nothing past the second token is inspected — no version check,
/// no header parsing, no body. An unknown method token is not an error;
/// it is stored as `method: None` for the handler to answer.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    // Non-UTF-8 bytes can only appear past the tokens we care about,
    // so a lossy decode is safe for the request line itself.
    let text = String::from_utf8_lossy(buf);
    let mut tokens = text.split_whitespace();

    let method_token = tokens.next().ok_or(ParseError::Empty)?;
    let uri = tokens.next().ok_or(ParseError::MissingUri)?;

    Ok(Request {
        method: Method::from_str(method_token),
        uri: uri.to_string(),
    })
}
