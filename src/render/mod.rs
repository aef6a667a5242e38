//! Response renderer - turns a `Response` into a display-ready `RenderModel`
//!
//! Rendering is pure and never fails: a body that does not match its declared
//! content type is shown verbatim, with a note explaining why.

pub mod html;
pub mod json;

use crate::models::Response;

/// Formatting policy derived from the Content-Type header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Json,
    Other,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Html => "HTML",
            ContentKind::Json => "JSON",
            ContentKind::Other => "Text",
        }
    }
}

/// Classify a Content-Type value by substring.
///
/// "html" wins over "json"; a missing header is treated as plain text.
pub fn classify(content_type: Option<&str>) -> ContentKind {
    let Some(value) = content_type else {
        return ContentKind::Other;
    };
    let value = value.to_ascii_lowercase();

    if value.contains("html") {
        ContentKind::Html
    } else if value.contains("json") {
        ContentKind::Json
    } else {
        ContentKind::Other
    }
}

/// Status, headers and body of one response, ready for display
#[derive(Clone, Debug, PartialEq)]
pub struct RenderModel {
    pub status_line: String,
    /// Same order as received, duplicates kept
    pub header_rows: Vec<(String, String)>,
    pub body_block: String,
    pub kind: ContentKind,
    /// Set when the body could not be formatted as `kind`
    pub note: Option<String>,
}

pub fn render(response: &Response) -> RenderModel {
    let kind = classify(response.content_type());

    let formatted = match kind {
        ContentKind::Html => html::prettify(&response.body),
        ContentKind::Json => json::prettify(&response.body),
        ContentKind::Other => Ok(response.body.clone()),
    };

    let (body_block, note) = match formatted {
        Ok(body) => (body, None),
        Err(e) => {
            tracing::debug!(kind = kind.as_str(), error = %e, "Falling back to verbatim body");
            (response.body.clone(), Some(e.to_string()))
        }
    };

    RenderModel {
        status_line: response.status_code.to_string(),
        header_rows: response.headers.clone(),
        body_block,
        kind,
        note,
    }
}
