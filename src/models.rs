use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    /// Selector options, in display order
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::DELETE,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::GET => HttpMethod::POST,
            HttpMethod::POST => HttpMethod::PUT,
            HttpMethod::PUT => HttpMethod::DELETE,
            HttpMethod::DELETE => HttpMethod::GET,
        }
    }

    /// Whether a request body is sent for this method.
    ///
    /// GET and DELETE never carry a payload, even if one was typed.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DispatchError::UnsupportedMethod(s.to_string()))
    }
}

/// A request as built from user input. Immutable once handed to the dispatcher.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: HttpMethod, url: impl Into<String>, body: Option<String>) -> Self {
        Request {
            method,
            url: url.into(),
            body,
        }
    }

    /// The payload that will actually go on the wire, if any.
    pub fn payload(&self) -> Option<&str> {
        if !self.method.has_body() {
            return None;
        }
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}

/// Response from HTTP request
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status_code: u16,
    /// Wire order, duplicates kept
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    /// Case-insensitive lookup of the first header with the given name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_cycle_visits_all() {
        let mut m = HttpMethod::GET;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(m);
            m = m.next();
        }
        assert_eq!(seen, HttpMethod::ALL.to_vec());
        assert_eq!(m, HttpMethod::GET);
    }

    #[test]
    fn test_body_policy() {
        assert!(!HttpMethod::GET.has_body());
        assert!(HttpMethod::POST.has_body());
        assert!(HttpMethod::PUT.has_body());
        assert!(!HttpMethod::DELETE.has_body());
    }

    #[test]
    fn test_payload_dropped_for_bodyless_methods() {
        let req = Request::new(HttpMethod::DELETE, "http://x", Some("data".into()));
        assert_eq!(req.payload(), None);

        let req = Request::new(HttpMethod::POST, "http://x", Some(String::new()));
        assert_eq!(req.payload(), None);

        let req = Request::new(HttpMethod::PUT, "http://x", Some("data".into()));
        assert_eq!(req.payload(), Some("data"));
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::POST);
        assert_eq!(" DELETE ".parse::<HttpMethod>().unwrap(), HttpMethod::DELETE);
        assert!("PATCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let resp = Response {
            status_code: 200,
            headers: vec![
                ("content-type".into(), "text/html".into()),
                ("Content-Type".into(), "application/json".into()),
            ],
            body: String::new(),
        };
        assert_eq!(resp.content_type(), Some("text/html"));
        assert_eq!(resp.header("X-Missing"), None);
    }
}
