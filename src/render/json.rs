//! JSON pretty-printing

use crate::error::RenderError;

/// Re-serialize `body` with 2-space indentation.
///
/// Key order and number text are kept as received (`preserve_order` and
/// `arbitrary_precision` are enabled on serde_json).
pub fn prettify(body: &str) -> Result<String, RenderError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
