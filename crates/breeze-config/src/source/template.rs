//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Breeze configuration
# Only set what you want to change -- missing fields use defaults.

# "media" follows the OS preference, "class" activates under `.dark`.
# A custom marker: darkMode = ["class", "[data-theme=\"dark\"]"]
darkMode = "class"

# prefix = ""            # letters, digits, `-` and `_`
# important = false      # true, or a selector such as "#app"
# plugins = ["@breeze/container-queries", "@breeze/aspect-ratio"]
# safelist = ["hidden", { pattern = "^bg-(red|blue)-500$" }]

[content]
# Files scanned for utility classes. `!` excludes, `{a,b}` expands.
files = ["*.html", "./src/**/*.rs"]
# relative = false       # resolve patterns from this file's directory

[theme.extend]
# Merged over the defaults. Nested tables flatten to dash-joined names.
# [theme.extend.colors]
# brand = { DEFAULT = "#0ea5e9", light = "#e0f2fe" }

[theme.container]
center = true
# padding = "1rem"       # or { DEFAULT = "1rem", lg = "4rem" }
"##
    .to_string()
}
