// Public API exports
pub mod app;
pub mod config;
pub mod parser;

// Re-export main types for convenience
pub use app::Generix;
pub use config::{ConfigError, GenerixConfig};

pub use parser::{
    BuiltinProvider, Definition, DispatchError, ExtensionRegistry, JsonParser, NamedFile,
    NamedReader, NoParserError, Parser, ParserClass, ParserDescriptor, ParserKind,
    ParserProvider, RegistryWarning, SourceFile, StaticProvider, TextParser, build_registry,
    builtin_descriptors, extension_of, merge_definitions,
};
