use crate::themes::Theme;

/// Named set of connector glyphs controlling the tree's visual rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Tree,
    Minimal,
    Boxed,
    Arrow,
}

impl Style {
    /// Look up a style by name. Unknown names silently fall back to `Tree`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimal" => Style::Minimal,
            "boxed" => Style::Boxed,
            "arrow" => Style::Arrow,
            _ => Style::Tree,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Tree => "tree",
            Style::Minimal => "minimal",
            Style::Boxed => "boxed",
            Style::Arrow => "arrow",
        }
    }

    /// Glyph placed directly before the node's own line.
    pub fn connector(&self, is_last: bool) -> &'static str {
        match self {
            Style::Tree => {
                if is_last {
                    "└── "
                } else {
                    "├── "
                }
            }
            Style::Minimal => {
                if is_last {
                    "╰─ "
                } else {
                    "├─ "
                }
            }
            Style::Boxed => {
                if is_last {
                    "└─ "
                } else {
                    "├─ "
                }
            }
            Style::Arrow => "➤ ",
        }
    }

    /// Prefix extension threaded down to this node's children.
    pub fn child_prefix(&self, is_last: bool) -> &'static str {
        match self {
            Style::Tree => {
                if is_last {
                    "    "
                } else {
                    "│   "
                }
            }
            Style::Minimal | Style::Boxed => {
                if is_last {
                    "   "
                } else {
                    "│  "
                }
            }
            Style::Arrow => "  ",
        }
    }
}

/// Rendering options for a mind map.
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub style: Style,
    pub show_icons: bool,
    pub show_types: bool,
    pub show_memory: bool,
    /// Depth cutoff: children below it are built as `…` placeholder
    /// leaves. `None` means unbounded; `Some(0)` keeps the root only.
    pub max_depth: Option<usize>,
    pub theme: Option<Theme>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: Style::Tree,
            show_icons: true,
            show_types: false,
            show_memory: false,
            max_depth: None,
            theme: None,
        }
    }
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    pub fn with_types(mut self, show: bool) -> Self {
        self.show_types = show;
        self
    }

    pub fn with_memory(mut self, show: bool) -> Self {
        self.show_memory = show;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}
