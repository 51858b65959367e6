use super::FormatError;
use crate::models::Node;

/// Convert a node tree to YAML.
pub fn to_yaml(root: &Node) -> Result<String, FormatError> {
    serde_yaml::to_string(root).map_err(FormatError::from)
}
