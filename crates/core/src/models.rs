use serde::Serialize;
use serde_json::Value;

/// Lightweight snapshot of the value behind a node.
///
/// Containers carry only their length; scalars carry a clone of the source
/// scalar. The source document itself is never mutated or consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeValue {
    Object { len: usize },
    Array { len: usize },
    Scalar(Value),
}

impl NodeValue {
    pub(crate) fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => NodeValue::Object { len: map.len() },
            Value::Array(items) => NodeValue::Array { len: items.len() },
            scalar => NodeValue::Scalar(scalar.clone()),
        }
    }

    /// Whether this is a scalar (not a mapping or sequence).
    pub fn is_scalar(&self) -> bool {
        matches!(self, NodeValue::Scalar(_))
    }

    /// Runtime type name: `object`, `array`, `string`, `integer`, `float`,
    /// `boolean`, or `null`.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeValue::Object { .. } | NodeValue::Scalar(Value::Object(_)) => "object",
            NodeValue::Array { .. } | NodeValue::Scalar(Value::Array(_)) => "array",
            // Boolean stays ahead of number; loosely typed sources classify
            // flags as numeric and the check order is observable.
            NodeValue::Scalar(Value::Bool(_)) => "boolean",
            NodeValue::Scalar(Value::Number(n)) => {
                if n.is_i64() || n.is_u64() {
                    "integer"
                } else {
                    "float"
                }
            }
            NodeValue::Scalar(Value::String(_)) => "string",
            NodeValue::Scalar(Value::Null) => "null",
        }
    }

    /// Developer-readable inline representation: strings single-quoted,
    /// numbers in decimal, booleans `true`/`false`. `None` for containers
    /// and null.
    pub fn scalar_repr(&self) -> Option<String> {
        match self {
            NodeValue::Scalar(Value::String(s)) => Some(format!("'{s}'")),
            NodeValue::Scalar(Value::Number(n)) => Some(n.to_string()),
            NodeValue::Scalar(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// One position in the source document's hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Mapping key, stringified sequence index, or the literal `root`.
    pub key: String,
    pub value: NodeValue,
    /// Distance from the root at construction time (root = 0).
    pub depth: usize,
    /// Dotted/bracketed address from the root, e.g. `user.tags[0]`.
    /// Empty for the root. Deliberately not rewritten by `focus_on`.
    pub path: String,
    /// Type name of `value`, computed once at construction.
    pub data_type: &'static str,
    /// Best-effort shallow byte estimate of `value`, computed once.
    pub memory_size: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Build a node from a borrowed source value. Children start empty;
    /// the tree builder appends them.
    pub fn new(
        key: impl Into<String>,
        value: &Value,
        depth: usize,
        path: impl Into<String>,
    ) -> Self {
        let snapshot = NodeValue::from_value(value);
        let data_type = snapshot.type_name();
        let memory_size = approximate_size(value);
        Self {
            key: key.into(),
            value: snapshot,
            depth,
            path: path.into(),
            data_type,
            memory_size,
            children: Vec::new(),
        }
    }

    /// Copy of this node without its children, for filter rebuilds.
    pub fn shallow_copy(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            depth: self.depth,
            path: self.path.clone(),
            data_type: self.data_type,
            memory_size: self.memory_size,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

/// Shallow byte estimate in the spirit of `sys.getsizeof`: the enum itself
/// plus directly owned buffers, without recursing into children. Cannot
/// fail; a value with nothing measurable just contributes its base size.
fn approximate_size(value: &Value) -> usize {
    let base = std::mem::size_of::<Value>();
    match value {
        Value::String(s) => base + s.capacity(),
        Value::Array(items) => base + items.len() * std::mem::size_of::<Value>(),
        Value::Object(map) => {
            base + map
                .iter()
                .map(|(key, _)| key.capacity() + std::mem::size_of::<Value>())
                .sum::<usize>()
        }
        _ => base,
    }
}

/// Aggregate numbers over a tree, for summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub max_depth: usize,
    pub objects: usize,
    pub arrays: usize,
    pub scalars: usize,
}

impl TreeStats {
    pub fn collect(root: &Node) -> Self {
        let mut stats = Self::default();
        stats.visit(root);
        stats
    }

    fn visit(&mut self, node: &Node) {
        self.total_nodes += 1;
        self.max_depth = self.max_depth.max(node.depth);
        match node.value {
            NodeValue::Object { .. } => self.objects += 1,
            NodeValue::Array { .. } => self.arrays += 1,
            NodeValue::Scalar(_) => self.scalars += 1,
        }
        for child in &node.children {
            self.visit(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_names() {
        assert_eq!(NodeValue::from_value(&json!({"a": 1})).type_name(), "object");
        assert_eq!(NodeValue::from_value(&json!([1, 2])).type_name(), "array");
        assert_eq!(NodeValue::from_value(&json!("hi")).type_name(), "string");
        assert_eq!(NodeValue::from_value(&json!(3)).type_name(), "integer");
        assert_eq!(NodeValue::from_value(&json!(3.5)).type_name(), "float");
        assert_eq!(NodeValue::from_value(&json!(true)).type_name(), "boolean");
        assert_eq!(NodeValue::from_value(&json!(null)).type_name(), "null");
    }

    #[test]
    fn test_scalar_repr() {
        assert_eq!(
            NodeValue::from_value(&json!("x")).scalar_repr(),
            Some("'x'".to_string())
        );
        assert_eq!(
            NodeValue::from_value(&json!(30)).scalar_repr(),
            Some("30".to_string())
        );
        assert_eq!(
            NodeValue::from_value(&json!(false)).scalar_repr(),
            Some("false".to_string())
        );
        assert_eq!(NodeValue::from_value(&json!(null)).scalar_repr(), None);
        assert_eq!(NodeValue::from_value(&json!([1])).scalar_repr(), None);
    }

    #[test]
    fn test_node_metadata_computed_at_construction() {
        let node = Node::new("greeting", &json!("hello"), 1, "greeting");
        assert_eq!(node.data_type, "string");
        assert!(node.memory_size > 0);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_shallow_copy_drops_children() {
        let mut node = Node::new("root", &json!({"a": 1}), 0, "");
        node.children.push(Node::new("a", &json!(1), 1, "a"));
        let copy = node.shallow_copy();
        assert_eq!(copy.key, node.key);
        assert_eq!(copy.path, node.path);
        assert!(copy.children.is_empty());
        assert_eq!(node.count(), 2);
        assert_eq!(copy.count(), 1);
    }
}
