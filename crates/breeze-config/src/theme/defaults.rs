//! Built-in default theme table.
//!
//! Immutable; user overrides and extensions are merged over a clone.

use crate::schema::{ThemeTokens, TokenMap, TokenValue};
use std::sync::LazyLock;

static DEFAULT_THEME: LazyLock<ThemeTokens> = LazyLock::new(build_default_theme);

/// The default token table.
pub fn default_theme() -> &'static ThemeTokens {
    &DEFAULT_THEME
}

fn scalars(pairs: &[(&str, &str)]) -> TokenMap {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), TokenValue::from(*value)))
        .collect()
}

fn lists(pairs: &[(&str, &[&str])]) -> TokenMap {
    pairs
        .iter()
        .map(|(name, items)| {
            (
                name.to_string(),
                TokenValue::List(items.iter().map(|s| s.to_string()).collect()),
            )
        })
        .collect()
}

const FONT_SANS: &[&str] = &[
    "ui-sans-serif",
    "system-ui",
    "sans-serif",
    "\"Apple Color Emoji\"",
    "\"Segoe UI Emoji\"",
];
const FONT_SERIF: &[&str] = &["ui-serif", "Georgia", "Cambria", "\"Times New Roman\"", "serif"];
const FONT_MONO: &[&str] = &["ui-monospace", "SFMono-Regular", "Menlo", "Monaco", "monospace"];

fn build_default_theme() -> ThemeTokens {
    let mut theme = ThemeTokens::new();

    theme.insert(
        "screens".into(),
        scalars(&[
            ("sm", "640px"),
            ("md", "768px"),
            ("lg", "1024px"),
            ("xl", "1280px"),
            ("2xl", "1536px"),
        ]),
    );

    theme.insert(
        "spacing".into(),
        scalars(&[
            ("px", "1px"),
            ("0", "0px"),
            ("0.5", "0.125rem"),
            ("1", "0.25rem"),
            ("2", "0.5rem"),
            ("3", "0.75rem"),
            ("4", "1rem"),
            ("5", "1.25rem"),
            ("6", "1.5rem"),
            ("8", "2rem"),
            ("10", "2.5rem"),
            ("12", "3rem"),
            ("16", "4rem"),
            ("20", "5rem"),
            ("24", "6rem"),
            ("32", "8rem"),
            ("48", "12rem"),
            ("64", "16rem"),
            ("96", "24rem"),
        ]),
    );

    theme.insert(
        "colors".into(),
        scalars(&[
            ("inherit", "inherit"),
            ("current", "currentColor"),
            ("transparent", "transparent"),
            ("black", "#000"),
            ("white", "#fff"),
            ("slate-100", "#f1f5f9"),
            ("slate-500", "#64748b"),
            ("slate-900", "#0f172a"),
            ("gray-100", "#f3f4f6"),
            ("gray-500", "#6b7280"),
            ("gray-900", "#111827"),
            ("red-100", "#fee2e2"),
            ("red-500", "#ef4444"),
            ("red-900", "#7f1d1d"),
            ("green-100", "#dcfce7"),
            ("green-500", "#22c55e"),
            ("green-900", "#14532d"),
            ("blue-100", "#dbeafe"),
            ("blue-500", "#3b82f6"),
            ("blue-900", "#1e3a8a"),
            ("sky-500", "#0ea5e9"),
        ]),
    );

    theme.insert(
        "borderRadius".into(),
        scalars(&[
            ("none", "0px"),
            ("sm", "0.125rem"),
            ("DEFAULT", "0.25rem"),
            ("md", "0.375rem"),
            ("lg", "0.5rem"),
            ("xl", "0.75rem"),
            ("full", "9999px"),
        ]),
    );

    theme.insert(
        "fontFamily".into(),
        lists(&[("sans", FONT_SANS), ("serif", FONT_SERIF), ("mono", FONT_MONO)]),
    );

    theme.insert(
        "fontSize".into(),
        scalars(&[
            ("xs", "0.75rem"),
            ("sm", "0.875rem"),
            ("base", "1rem"),
            ("lg", "1.125rem"),
            ("xl", "1.25rem"),
            ("2xl", "1.5rem"),
            ("4xl", "2.25rem"),
        ]),
    );

    theme.insert(
        "opacity".into(),
        scalars(&[
            ("0", "0"),
            ("25", "0.25"),
            ("50", "0.5"),
            ("75", "0.75"),
            ("100", "1"),
        ]),
    );

    theme
}
