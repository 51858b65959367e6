use serde_json::Value;

use crate::config::MapConfig;
use crate::models::NodeValue;

/// Marker prepended to lines whose node matched the last search.
pub const HIGHLIGHT_MARK: &str = "🔸 ";

/// Built-in glyphs for well-known key names, matched against the
/// lower-cased key.
const KEY_ICONS: &[(&str, &str)] = &[
    ("name", "📛"),
    ("username", "👤"),
    ("user", "👤"),
    ("email", "📧"),
    ("age", "🎂"),
    ("title", "✏️"),
    ("description", "📝"),
    ("id", "🆔"),
    ("url", "🌐"),
    ("link", "🔗"),
    ("website", "🌐"),
    ("phone", "📞"),
    ("address", "🏠"),
    ("location", "📍"),
    ("price", "💰"),
    ("cost", "💰"),
    ("amount", "💰"),
    ("date", "📅"),
    ("time", "⏰"),
    ("created", "📅"),
    ("updated", "🔄"),
    ("status", "📊"),
    ("active", "✅"),
    ("enabled", "✅"),
    ("disabled", "❌"),
    ("count", "🔢"),
    ("total", "🔢"),
    ("size", "📏"),
    ("file", "📄"),
    ("image", "🖼️"),
    ("photo", "🖼️"),
    ("password", "🔒"),
    ("token", "🔑"),
    ("key", "🔑"),
    ("tags", "🏷️"),
    ("categories", "📑"),
];

/// Resolve the decorative label for a node, with a trailing separator
/// space, or an empty string when icons are disabled.
///
/// Resolution order: theme icon by exact key, built-in key table, theme
/// icon by type name, built-in type table, generic bullet.
pub fn resolve_icon(value: &NodeValue, key: &str, config: &MapConfig) -> String {
    if !config.show_icons {
        return String::new();
    }

    if let Some(theme) = &config.theme {
        if let Some(glyph) = theme.icon(key) {
            return format!("{glyph} ");
        }
    }

    let key_lower = key.to_lowercase();
    if let Some((_, glyph)) = KEY_ICONS.iter().find(|(name, _)| *name == key_lower) {
        return format!("{glyph} ");
    }

    if let Some(theme) = &config.theme {
        if let Some(glyph) = theme.icon(value.type_name()) {
            return format!("{glyph} ");
        }
    }

    // Boolean before number: the order of this table is load-bearing.
    let glyph = match value {
        NodeValue::Object { .. } => "📦",
        NodeValue::Array { .. } => "📋",
        NodeValue::Scalar(Value::Bool(true)) => "✅",
        NodeValue::Scalar(Value::Bool(false)) => "❌",
        NodeValue::Scalar(Value::Number(_)) => "🔢",
        NodeValue::Scalar(Value::String(_)) => "🔤",
        NodeValue::Scalar(Value::Null) => "🚫",
        NodeValue::Scalar(_) => "•",
    };
    format!("{glyph} ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::get_theme;
    use serde_json::json;

    fn scalar(value: serde_json::Value) -> NodeValue {
        NodeValue::from_value(&value)
    }

    #[test]
    fn test_disabled_icons_are_empty() {
        let config = MapConfig::new().with_icons(false);
        assert_eq!(resolve_icon(&scalar(json!("x")), "email", &config), "");
    }

    #[test]
    fn test_key_table_wins_over_type_table() {
        let config = MapConfig::default();
        assert_eq!(resolve_icon(&scalar(json!("a@b.c")), "email", &config), "📧 ");
        assert_eq!(resolve_icon(&scalar(json!("a@b.c")), "Email", &config), "📧 ");
    }

    #[test]
    fn test_type_table_dispatch() {
        let config = MapConfig::default();
        assert_eq!(resolve_icon(&scalar(json!({"a": 1})), "other", &config), "📦 ");
        assert_eq!(resolve_icon(&scalar(json!([1])), "other", &config), "📋 ");
        assert_eq!(resolve_icon(&scalar(json!(true)), "other", &config), "✅ ");
        assert_eq!(resolve_icon(&scalar(json!(false)), "other", &config), "❌ ");
        assert_eq!(resolve_icon(&scalar(json!(1.5)), "other", &config), "🔢 ");
        assert_eq!(resolve_icon(&scalar(json!(null)), "other", &config), "🚫 ");
    }

    #[test]
    fn test_theme_overrides() {
        let config = MapConfig::new().with_theme(get_theme("professional"));
        // Type-name theme entry beats the built-in type table.
        assert_eq!(resolve_icon(&scalar(json!(7)), "other", &config), "# ");
        // Built-in key table still beats type-name theme entries.
        assert_eq!(resolve_icon(&scalar(json!(7)), "age", &config), "🎂 ");
    }

    #[test]
    fn test_theme_exact_key_wins() {
        let mut theme = get_theme("default");
        theme.icons.insert("age".to_string(), "@".to_string());
        let config = MapConfig::new().with_theme(theme);
        assert_eq!(resolve_icon(&scalar(json!(7)), "age", &config), "@ ");
    }
}
