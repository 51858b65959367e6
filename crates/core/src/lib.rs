//! MXray Core Library
//!
//! Renders nested data structures (mappings, sequences, scalars) as
//! ASCII/Unicode mind-map trees for terminal inspection.
//!
//! # Features
//!
//! - Build a node tree from any `serde_json::Value`, with an optional depth
//!   cutoff
//! - Four connector styles (tree, minimal, boxed, arrow) and named icon
//!   themes
//! - Optional type and memory annotations per node
//! - Search (highlight), filter (prune), and focus (re-root) operations
//! - Loaders for JSON strings, local JSON/YAML/TOML files, and remote URLs
//! - Export the tree as text, ANSI-colored text, JSON, or YAML
//!
//! # Example
//!
//! ```
//! use mxray_core::{MapConfig, MindMap};
//! use serde_json::json;
//!
//! let data = json!({"name": "Ana", "tags": ["x", "y"]});
//! let map = MindMap::new(&data, MapConfig::new().with_icons(false));
//! println!("{}", map.render());
//! ```

pub mod config;
pub mod engine;
pub mod icons;
pub mod loader;
pub mod map;
pub mod models;
pub mod output;
pub mod themes;

// Re-exports for convenience
pub use config::{MapConfig, Style};
pub use engine::{Renderer, TreeBuilder};
pub use icons::{resolve_icon, HIGHLIGHT_MARK};
pub use loader::{from_json_str, from_path, from_url, LoadError};
pub use map::{xray, MapError, MindMap};
pub use models::{Node, NodeValue, TreeStats};
pub use output::{format_output, save_map, to_json, to_yaml, FormatError, OutputFormat};
pub use themes::{get_theme, Theme};
