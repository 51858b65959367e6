use serde_json::Value;

use crate::models::Node;

/// Value standing in for children elided by the depth cutoff.
const ELISION: &str = "…";

/// Builds a [`Node`] tree from a borrowed nested value.
///
/// Mapping children preserve source iteration order; sequence children use
/// stringified indices as keys. With a depth cutoff, a node exactly at the
/// cutoff keeps its real value while its would-be children are built as
/// leaves holding an `…` placeholder. A cutoff of zero keeps the root
/// alone, without placeholder children.
pub struct TreeBuilder {
    max_depth: Option<usize>,
}

impl TreeBuilder {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    pub fn build(&self, data: &Value) -> Node {
        self.build_node("root", data, 0, String::new())
    }

    fn build_node(&self, key: &str, value: &Value, depth: usize, path: String) -> Node {
        if let Some(limit) = self.max_depth {
            if depth > limit {
                let placeholder = Value::String(ELISION.to_string());
                return Node::new(key, &placeholder, depth, path);
            }
        }

        let mut node = Node::new(key, value, depth, path.clone());

        if self.max_depth == Some(0) {
            return node;
        }

        match value {
            Value::Object(map) => {
                for (child_key, child_value) in map {
                    let child_path = if path.is_empty() {
                        child_key.clone()
                    } else {
                        format!("{path}.{child_key}")
                    };
                    node.children
                        .push(self.build_node(child_key, child_value, depth + 1, child_path));
                }
            }
            Value::Array(items) => {
                for (index, child_value) in items.iter().enumerate() {
                    let child_path = format!("{path}[{index}]");
                    node.children.push(self.build_node(
                        &index.to_string(),
                        child_value,
                        depth + 1,
                        child_path,
                    ));
                }
            }
            _ => {}
        }

        node
    }
}
