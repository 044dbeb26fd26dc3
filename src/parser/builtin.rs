//! Static registration table for the parsers shipped with the crate.
//!
//! To add a parser, implement [`ParserKind`](super::ParserKind) for it and
//! append a descriptor to [`builtin_descriptors`]. Order matters: when two
//! parsers claim the same extension, the earlier entry keeps it.

use super::{JsonParser, ParserDescriptor, ParserProvider, TextParser};

/// Descriptors for every built-in parser, in registration order
pub fn builtin_descriptors() -> Vec<ParserDescriptor> {
    vec![
        ParserDescriptor::of::<JsonParser>("json"),
        ParserDescriptor::of::<TextParser>("text"),
    ]
}

/// Provider serving [`builtin_descriptors`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl ParserProvider for BuiltinProvider {
    fn descriptors(&self) -> Vec<ParserDescriptor> {
        builtin_descriptors()
    }
}
