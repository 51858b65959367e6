use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::config::MapConfig;
use crate::map::MindMap;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),
}

/// Build a map from a serialized JSON document.
pub fn from_json_str(source: &str, config: MapConfig) -> Result<MindMap, LoadError> {
    let value: Value = serde_json::from_str(source)?;
    Ok(MindMap::new(&value, config))
}

/// Build a map from a local file. `.json`, `.yaml`/`.yml`, and `.toml` are
/// parsed by extension; anything else is loaded as one string scalar.
pub fn from_path(path: &Path, config: MapConfig) -> Result<MindMap, LoadError> {
    let content = fs::read_to_string(path)?;

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let value: Value = match extension.as_str() {
        "json" => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "toml" => {
            let parsed: toml::Value = toml::from_str(&content)?;
            serde_json::to_value(parsed)?
        }
        _ => Value::String(content),
    };

    Ok(MindMap::new(&value, config))
}

/// Fetch a remote JSON document and build a map from it.
pub fn from_url(url: &str, config: MapConfig) -> Result<MindMap, LoadError> {
    let value: Value = ureq::get(url)
        .call()
        .map_err(Box::new)?
        .into_json()?;
    Ok(MindMap::new(&value, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config() -> MapConfig {
        MapConfig::new().with_icons(false)
    }

    #[test]
    fn test_from_json_str() {
        let map = from_json_str(r#"{"a": 1}"#, config()).unwrap();
        assert_eq!(map.render(), "root\n└── a: 1");
    }

    #[test]
    fn test_from_json_str_invalid_propagates() {
        assert!(from_json_str("{not json", config()).is_err());
    }

    #[test]
    fn test_from_path_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"x": true}}"#).unwrap();
        let map = from_path(file.path(), config()).unwrap();
        assert_eq!(map.render(), "root\n└── x: true");
    }

    #[test]
    fn test_from_path_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "a: 1\nb: two\n").unwrap();
        let map = from_path(file.path(), config()).unwrap();
        assert_eq!(map.render(), "root\n├── a: 1\n└── b: 'two'");
    }

    #[test]
    fn test_from_path_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "title = \"demo\"\n").unwrap();
        let map = from_path(file.path(), config()).unwrap();
        assert_eq!(map.render(), "root\n└── title: 'demo'");
    }

    #[test]
    fn test_from_path_other_extension_is_plain_text() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "just text").unwrap();
        let map = from_path(file.path(), config()).unwrap();
        assert_eq!(map.render(), "root: 'just text'");
    }

    #[test]
    fn test_from_path_missing_file() {
        assert!(from_path(Path::new("/no/such/file.json"), config()).is_err());
    }
}
