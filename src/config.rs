use crate::trivia::{MarkerSet, DEFAULT_PREFIX};
use serde::{Deserialize, Serialize};

/// Transformer configuration (`glsl-minify.config.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformerConfig {
    /// Tags rendered as `/* tag */` markers (default: `["glsl"]`)
    #[serde(default = "default_prefixes")]
    pub custom_prefixes: Vec<String>,
}

fn default_prefixes() -> Vec<String> {
    vec![DEFAULT_PREFIX.to_string()]
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            custom_prefixes: default_prefixes(),
        }
    }
}

impl TransformerConfig {
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            custom_prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn marker_set(&self) -> MarkerSet {
        MarkerSet::from_prefixes(&self.custom_prefixes)
    }
}
