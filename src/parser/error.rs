use std::collections::BTreeSet;
use thiserror::Error;

/// No registered parser handles a file's extension
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No parser found for {filename:?}. Supported extensions: {}", join(.extensions))]
pub struct NoParserError {
    pub filename: String,
    /// Every extension the registry knew about when the lookup failed
    pub extensions: BTreeSet<String>,
}

fn join(extensions: &BTreeSet<String>) -> String {
    if extensions.is_empty() {
        return "(none)".to_string();
    }
    extensions.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    NoParser(#[from] NoParserError),

    /// Raised by a parser's constructor or `load_from_file`, unmodified
    #[error(transparent)]
    Parser(anyhow::Error),

    #[error("Cannot merge an empty list of definitions")]
    EmptyMerge,
}
