use std::collections::HashSet;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::config::MapConfig;
use crate::engine::{Renderer, TreeBuilder};
use crate::models::{Node, NodeValue, TreeStats};

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Path not found: {0}")]
    PathNotFound(String),
}

/// A mind map over one nested value: the node tree, the rendering options,
/// and the highlight set produced by the last search.
///
/// `filter` and `focus_on` replace the root; `search` only touches the
/// highlight set. Each map is independent, with no shared state.
#[derive(Debug)]
pub struct MindMap {
    root: Node,
    config: MapConfig,
    highlighted: HashSet<String>,
}

impl MindMap {
    pub fn new(data: &Value, config: MapConfig) -> Self {
        let root = TreeBuilder::new(config.max_depth).build(data);
        Self {
            root,
            config,
            highlighted: HashSet::new(),
        }
    }

    pub fn with_defaults(data: &Value) -> Self {
        Self::new(data, MapConfig::default())
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Paths highlighted by the last `search`.
    pub fn highlighted(&self) -> &HashSet<String> {
        &self.highlighted
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }

    /// Render the complete map as plain text.
    pub fn render(&self) -> String {
        Renderer::new(&self.config, &self.highlighted).render(&self.root)
    }

    /// Render with ANSI colors.
    pub fn render_ansi(&self) -> String {
        Renderer::new(&self.config, &self.highlighted).render_ansi(&self.root)
    }

    /// Highlight every node whose key, string value, or decimal number or
    /// boolean rendering contains `query` (keys and strings
    /// case-insensitively). Previous highlights are cleared first; one
    /// full pass, no short-circuit.
    pub fn search(&mut self, query: &str) -> &mut Self {
        self.highlighted.clear();
        let needle = query.to_lowercase();

        fn visit(node: &Node, query: &str, needle: &str, hits: &mut HashSet<String>) {
            let matched = node.key.to_lowercase().contains(needle)
                || match &node.value {
                    NodeValue::Scalar(Value::String(s)) => s.to_lowercase().contains(needle),
                    NodeValue::Scalar(Value::Number(n)) => n.to_string().contains(query),
                    // Flags behave like numbers here: the literal query
                    // against the value's text rendering.
                    NodeValue::Scalar(Value::Bool(b)) => b.to_string().contains(query),
                    _ => false,
                };
            if matched {
                hits.insert(node.path.clone());
            }
            for child in &node.children {
                visit(child, query, needle, hits);
            }
        }

        visit(&self.root, query, &needle, &mut self.highlighted);
        self
    }

    /// Rebuild the tree keeping only nodes satisfying `predicate`.
    /// Survivors are shallow copies; a kept node may lose all children. If
    /// the root itself fails, the tree is left unchanged.
    pub fn filter<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&Node) -> bool,
    {
        fn keep<F: Fn(&Node) -> bool>(node: &Node, predicate: &F) -> Option<Node> {
            if !predicate(node) {
                return None;
            }
            let mut copy = node.shallow_copy();
            for child in &node.children {
                if let Some(kept) = keep(child, predicate) {
                    copy.children.push(kept);
                }
            }
            Some(copy)
        }

        if let Some(new_root) = keep(&self.root, &predicate) {
            self.root = new_root;
        }
        self
    }

    /// Re-root the map at the node addressed by `path`. The new root's
    /// depth is reset to 0; descendant depths and all `path` fields are
    /// left as built, so rely on tree position rather than `path` after
    /// focusing. One-way: the rest of the tree is discarded.
    pub fn focus_on(&mut self, path: &str) -> Result<&mut Self, MapError> {
        let segments = parse_path(path);

        let mut indices = Vec::with_capacity(segments.len());
        {
            let mut current = &self.root;
            for segment in &segments {
                let position = current
                    .children
                    .iter()
                    .position(|child| segment.matches(&child.key))
                    .ok_or_else(|| MapError::PathNotFound(path.to_string()))?;
                current = &current.children[position];
                indices.push(position);
            }
        }

        let placeholder = Node::new("root", &Value::Null, 0, String::new());
        let mut node = std::mem::replace(&mut self.root, placeholder);
        for index in indices {
            node = node.children.swap_remove(index);
        }
        node.depth = 0;
        self.root = node;
        Ok(self)
    }
}

impl fmt::Display for MindMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// One-liner x-ray of a value with default options.
pub fn xray(data: &Value) -> String {
    MindMap::with_defaults(data).render()
}

enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    fn matches(&self, key: &str) -> bool {
        match self {
            PathSegment::Key(name) => name == key,
            PathSegment::Index(index) => key == index.to_string(),
        }
    }
}

/// Split a dotted path into segments, peeling trailing `[i]` index groups
/// off each dot-separated part, so `user.tags[0]` resolves as `user`,
/// `tags`, index 0. A bracket group that is not an integer is matched
/// literally, mirroring the bare `[i]`-segment fallback rule.
fn parse_path(path: &str) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    for part in path.split('.') {
        let (head, mut rest) = match part.find('[') {
            Some(pos) => (&part[..pos], &part[pos..]),
            None => (part, ""),
        };
        if !head.is_empty() || rest.is_empty() {
            segments.push(PathSegment::Key(head.to_string()));
        }
        while let Some(close) = rest.find(']') {
            let inner = &rest[1..close];
            match inner.parse::<usize>() {
                Ok(index) => segments.push(PathSegment::Index(index)),
                Err(_) => segments.push(PathSegment::Key(format!("[{inner}]"))),
            }
            rest = &rest[close + 1..];
            if !rest.starts_with('[') {
                break;
            }
        }
        if !rest.is_empty() {
            segments.push(PathSegment::Key(rest.to_string()));
        }
    }
    segments
}
