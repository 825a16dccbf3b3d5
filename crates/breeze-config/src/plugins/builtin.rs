//! Plugins shipped with Breeze.

use super::ThemePlugin;
use crate::schema::{ThemeTokens, TokenMap, TokenValue};

/// Adds the `containers` category used by `@container` size queries.
pub struct ContainerQueries;

impl ThemePlugin for ContainerQueries {
    fn name(&self) -> &str {
        "@breeze/container-queries"
    }

    fn theme_contributions(&self) -> ThemeTokens {
        let sizes: TokenMap = [
            ("xs", "20rem"),
            ("sm", "24rem"),
            ("md", "28rem"),
            ("lg", "32rem"),
            ("xl", "36rem"),
            ("2xl", "42rem"),
            ("3xl", "48rem"),
            ("4xl", "56rem"),
            ("5xl", "64rem"),
            ("6xl", "72rem"),
            ("7xl", "80rem"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), TokenValue::from(v)))
        .collect();
        ThemeTokens::from([("containers".to_string(), sizes)])
    }
}

/// Adds integer `aspectRatio` steps 1 through 16.
pub struct AspectRatio;

impl ThemePlugin for AspectRatio {
    fn name(&self) -> &str {
        "@breeze/aspect-ratio"
    }

    fn theme_contributions(&self) -> ThemeTokens {
        let steps: TokenMap = (1..=16)
            .map(|n| (n.to_string(), TokenValue::Scalar(n.to_string())))
            .collect();
        ThemeTokens::from([("aspectRatio".to_string(), steps)])
    }
}
