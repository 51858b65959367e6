mod json;
mod yaml;

pub use json::to_json;
pub use yaml::to_yaml;

use std::fs;
use std::path::Path;

use crate::map::MindMap;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Ansi,
    Json,
    Yaml,
}

/// Format a map according to the specified format. Text variants render
/// the tree diagram; Json/Yaml serialize the node tree itself.
pub fn format_output(map: &MindMap, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(map.render()),
        OutputFormat::Ansi => Ok(map.render_ansi()),
        OutputFormat::Json => to_json(map.root()),
        OutputFormat::Yaml => to_yaml(map.root()),
    }
}

/// Format a map and write it to a file.
pub fn save_map(map: &MindMap, path: &Path, format: OutputFormat) -> Result<(), FormatError> {
    let output = format_output(map, format)?;
    fs::write(path, output)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
