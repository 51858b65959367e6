use std::collections::HashSet;

use termcolor::Color;

use crate::config::MapConfig;
use crate::icons::{resolve_icon, HIGHLIGHT_MARK};
use crate::models::Node;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Renders a node tree as indented text, one line per node.
///
/// Traversal is depth-first pre-order with the accumulated prefix threaded
/// through the recursion; there is no shared cursor state.
pub struct Renderer<'a> {
    config: &'a MapConfig,
    highlighted: &'a HashSet<String>,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a MapConfig, highlighted: &'a HashSet<String>) -> Self {
        Self {
            config,
            highlighted,
        }
    }

    /// Render as plain text. Trailing whitespace is trimmed from the very
    /// end only; no trailing newline.
    pub fn render(&self, root: &Node) -> String {
        self.render_with(root, false)
    }

    /// Render with ANSI colors: highlighted lines in bold yellow, scalar
    /// values colored per data type.
    pub fn render_ansi(&self, root: &Node) -> String {
        self.render_with(root, true)
    }

    fn render_with(&self, root: &Node, ansi: bool) -> String {
        let mut out = String::new();
        self.render_node(root, "", true, ansi, &mut out);
        out.trim_end().to_string()
    }

    fn render_node(&self, node: &Node, prefix: &str, is_last: bool, ansi: bool, out: &mut String) {
        let icon = resolve_icon(&node.value, &node.key, self.config);
        let highlighted = self.highlighted.contains(&node.path);
        let mark = if highlighted { HIGHLIGHT_MARK } else { "" };

        let label = format!("{mark}{icon}{}", node.key);
        let label = if ansi && highlighted {
            format!("{BOLD}{}{label}{RESET}", color_code(Color::Yellow))
        } else {
            label
        };

        if node.depth == 0 {
            out.push_str(&label);
            // A scalar root only occurs after focusing; show its value.
            if let Some(repr) = node.value.scalar_repr() {
                out.push_str(": ");
                out.push_str(&self.paint_repr(node, repr, ansi));
            }
            out.push('\n');
        } else {
            out.push_str(prefix);
            out.push_str(self.config.style.connector(is_last));
            out.push_str(&label);

            let mut metadata = Vec::new();
            if self.config.show_types && node.value.is_scalar() {
                metadata.push(format!("({})", node.data_type));
            }
            if self.config.show_memory && node.memory_size > 0 {
                metadata.push(format!("[{} bytes]", node.memory_size));
            }
            if !metadata.is_empty() {
                out.push(' ');
                out.push_str(&metadata.join(" "));
            }

            if let Some(repr) = node.value.scalar_repr() {
                out.push_str(": ");
                out.push_str(&self.paint_repr(node, repr, ansi));
            }
            out.push('\n');
        }

        let child_prefix = if node.depth == 0 {
            String::new()
        } else {
            format!("{prefix}{}", self.config.style.child_prefix(is_last))
        };

        let count = node.children.len();
        for (index, child) in node.children.iter().enumerate() {
            self.render_node(child, &child_prefix, index + 1 == count, ansi, out);
        }
    }

    fn paint_repr(&self, node: &Node, repr: String, ansi: bool) -> String {
        if !ansi {
            return repr;
        }
        let code = color_code(scalar_color(node.data_type));
        format!("{code}{repr}{RESET}")
    }
}

fn scalar_color(data_type: &str) -> Color {
    match data_type {
        "string" => Color::Green,
        "integer" | "float" => Color::Cyan,
        "boolean" => Color::Yellow,
        _ => Color::White,
    }
}

fn color_code(color: Color) -> &'static str {
    match color {
        Color::Blue => "\x1b[34m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Red => "\x1b[31m",
        _ => "\x1b[90m", // Gray
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Style;
    use crate::engine::TreeBuilder;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({"name": "Ana", "age": 30, "tags": ["x", "y"]})
    }

    fn render(config: &MapConfig) -> String {
        let root = TreeBuilder::new(config.max_depth).build(&sample());
        Renderer::new(config, &HashSet::new()).render(&root)
    }

    #[test]
    fn test_tree_style_without_icons() {
        let config = MapConfig::new().with_icons(false);
        let expected = "\
root
├── name: 'Ana'
├── age: 30
└── tags
    ├── 0: 'x'
    └── 1: 'y'";
        assert_eq!(render(&config), expected);
    }

    #[test]
    fn test_line_count_equals_node_count() {
        let config = MapConfig::default();
        let root = TreeBuilder::new(None).build(&sample());
        let rendered = Renderer::new(&config, &HashSet::new()).render(&root);
        assert_eq!(rendered.lines().count(), root.count());
    }

    #[test]
    fn test_max_depth_zero_renders_root_only() {
        let config = MapConfig::new().with_icons(false).with_max_depth(0);
        assert_eq!(render(&config), "root");
    }

    #[test]
    fn test_max_depth_one_renders_placeholder_lines() {
        let config = MapConfig::new().with_icons(false).with_max_depth(1);
        let expected = "\
root
├── name: 'Ana'
├── age: 30
└── tags
    ├── 0: '…'
    └── 1: '…'";
        assert_eq!(render(&config), expected);
    }

    #[test]
    fn test_container_line_has_no_inline_value() {
        let config = MapConfig::new().with_icons(false);
        let rendered = render(&config);
        let tags_line = rendered
            .lines()
            .find(|line| line.contains("tags"))
            .unwrap();
        assert_eq!(tags_line, "└── tags");
    }

    #[test]
    fn test_type_and_memory_metadata() {
        let config = MapConfig::new()
            .with_icons(false)
            .with_types(true)
            .with_memory(true);
        let rendered = render(&config);
        let name_line = rendered
            .lines()
            .find(|line| line.contains("name"))
            .unwrap();
        assert!(name_line.contains("(string)"));
        assert!(name_line.contains("bytes]"));
        assert!(name_line.ends_with(": 'Ana'"));
        // Containers get no type annotation.
        let tags_line = rendered
            .lines()
            .find(|line| line.contains("tags"))
            .unwrap();
        assert!(!tags_line.contains("(array)"));
    }

    #[test]
    fn test_arrow_style_connectors() {
        let config = MapConfig::new().with_icons(false).with_style(Style::Arrow);
        let expected = "\
root
➤ name: 'Ana'
➤ age: 30
➤ tags
  ➤ 0: 'x'
  ➤ 1: 'y'";
        assert_eq!(render(&config), expected);
    }

    #[test]
    fn test_minimal_style_last_child_connector() {
        let config = MapConfig::new().with_icons(false).with_style(Style::Minimal);
        let rendered = render(&config);
        assert!(rendered.contains("╰─ tags"));
        assert!(rendered.contains("├─ name: 'Ana'"));
    }

    #[test]
    fn test_highlight_marker_placement() {
        let config = MapConfig::new().with_icons(false);
        let root = TreeBuilder::new(None).build(&sample());
        let mut highlighted = HashSet::new();
        highlighted.insert("name".to_string());
        let rendered = Renderer::new(&config, &highlighted).render(&root);
        assert!(rendered.contains("├── 🔸 name: 'Ana'"));
    }

    #[test]
    fn test_default_icons_present() {
        let config = MapConfig::default();
        let rendered = render(&config);
        assert!(rendered.starts_with("📦 root"));
        assert!(rendered.contains("📛 name"));
        assert!(rendered.contains("🎂 age"));
        assert!(rendered.contains("🏷️ tags"));
    }

    #[test]
    fn test_ansi_colors_scalars() {
        let config = MapConfig::new().with_icons(false);
        let root = TreeBuilder::new(None).build(&sample());
        let rendered = Renderer::new(&config, &HashSet::new()).render_ansi(&root);
        assert!(rendered.contains("\x1b[32m'Ana'\x1b[0m"));
        assert!(rendered.contains("\x1b[36m30\x1b[0m"));
    }
}
