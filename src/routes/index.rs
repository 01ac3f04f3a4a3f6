//! The index endpoint.

use crate::config::INDEX_BODY;

/// Index handler.
///
/// Returns a plain-text "ok". It has no inputs and cannot fail, so every call
/// produces the same response.
pub async fn index() -> &'static str {
    INDEX_BODY
}
