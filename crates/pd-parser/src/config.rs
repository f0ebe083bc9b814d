//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how path data text is tokenized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Treat commas as parameter separators in addition to whitespace.
    pub comma_separators: bool,
    /// Reject input with more commands than this.
    pub max_commands: Option<usize>,
}

impl ParseConfig {
    /// Whitespace-separated parameters only. Same as `default()`.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Also accept commas between parameters (`M10,20 L30,40`).
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            comma_separators: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_commands(mut self, limit: usize) -> Self {
        self.max_commands = Some(limit);
        self
    }
}
