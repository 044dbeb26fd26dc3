use serde::{Deserialize, Serialize};

/// Result of loading one file through a parser
///
/// Dispatch and merging pass this through untouched; only the parser
/// that produced it knows the shape of `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Name of the file the definition was loaded from
    pub source: String,
    /// Name of the parser that produced it
    pub parser: String,
    /// Decoded contents
    pub content: serde_json::Value,
}

impl Definition {
    pub fn new(
        source: impl Into<String>,
        parser: impl Into<String>,
        content: serde_json::Value,
    ) -> Self {
        Self {
            source: source.into(),
            parser: parser.into(),
            content,
        }
    }
}
