use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Named override table mapping semantic key names or type names to glyphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub icons: HashMap<String, String>,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icons: HashMap::new(),
        }
    }

    fn with_icons(name: &str, entries: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            icons: entries
                .iter()
                .map(|(key, glyph)| (key.to_string(), glyph.to_string()))
                .collect(),
        }
    }

    pub fn icon(&self, key: &str) -> Option<&str> {
        self.icons.get(key).map(String::as_str)
    }
}

/// Look up a preset theme by name. Unknown names silently fall back to the
/// default (empty) theme.
pub fn get_theme(name: &str) -> Theme {
    match name {
        "professional" => Theme::with_icons(
            "professional",
            &[
                ("object", "📊"),
                ("array", "📑"),
                ("string", "🔤"),
                ("integer", "#"),
                ("float", "##"),
                ("boolean", "✓"),
                ("null", "∅"),
            ],
        ),
        "colorful" => Theme::with_icons(
            "colorful",
            &[
                ("object", "🌈"),
                ("array", "🎨"),
                ("string", "🎯"),
                ("integer", "🔢"),
                ("float", "💯"),
                ("boolean", "💚"),
                ("null", "⚫"),
            ],
        ),
        "emoji" => Theme::with_icons(
            "emoji",
            &[
                ("object", "📦"),
                ("array", "📋"),
                ("string", "🔤"),
                ("integer", "🔢"),
                ("float", "🔢"),
                ("boolean", "✅"),
                ("null", "🚫"),
            ],
        ),
        _ => Theme::new("default"),
    }
}
