//! Parser configuration

use serde::Deserialize;

/// Default bound on combined parenthesis and hydrate nesting
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Options controlling a single parse
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum scope depth; each parenthetical group and each hydrate segment adds one level.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
