//! i18n - Built-in Widget Strings
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en-US")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh-CN")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Read mode
    map.insert("no-value", ("None", "无"));
    map.insert("no-selection", ("None Selected", "未选择"));

    // Select
    map.insert("select-placeholder", ("Select...", "请选择..."));
    map.insert("select-loading", ("Loading...", "加载中..."));
    map.insert("select-search", ("Search options...", "搜索选项..."));
    map.insert("select-create", ("Type to add options...", "输入以添加选项..."));
    map.insert(
        "select-search-create",
        ("Type to add or search options...", "输入以添加或搜索选项..."),
    );
    map.insert("select-create-item", ("Create \"{}\"", "创建 \"{}\""));
    map.insert("select-no-options", ("No options", "无选项"));
    map.insert("select-clear", ("Clear", "清除"));

    // Field frame
    map.insert("field-required", ("Required", "必填"));

    // Demo
    map.insert("demo-title", ("Form Widgets", "表单组件"));
    map.insert("demo-submit", ("Submit", "提交"));
    map.insert("demo-reset", ("Reset", "重置"));
    map.insert("demo-read", ("Read", "只读"));
    map.insert("demo-edit", ("Edit", "编辑"));
    map.insert("demo-invalid", ("field(s) have errors", "个字段有错误"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key whose text has one `{}` argument
pub fn t_with(locale: Locale, key: &str, arg: &str) -> SharedString {
    SharedString::from(t(locale, key).replacen("{}", arg, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_translate() {
        assert_eq!(t(Locale::EnUS, "no-selection").as_ref(), "None Selected");
        assert_eq!(t(Locale::ZhCN, "select-loading").as_ref(), "加载中...");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "missing-key").as_ref(), "missing-key");
    }

    #[test]
    fn argument_is_substituted() {
        assert_eq!(
            t_with(Locale::EnUS, "select-create-item", "Svelte").as_ref(),
            "Create \"Svelte\""
        );
    }
}
