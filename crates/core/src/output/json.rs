use super::FormatError;
use crate::models::Node;

/// Convert a node tree to pretty-printed JSON.
pub fn to_json(root: &Node) -> Result<String, FormatError> {
    serde_json::to_string_pretty(root).map_err(FormatError::from)
}
