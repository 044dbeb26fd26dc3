mod builtin;
mod definition;
mod descriptor;
mod dispatch;
mod error;
mod json;
mod registry;
mod source;
mod text;


pub use builtin::{BuiltinProvider, builtin_descriptors};
pub use definition::Definition;
pub use descriptor::{ParserDescriptor, ParserProvider, StaticProvider};
pub use dispatch::{extension_of, merge_definitions};
pub use error::{DispatchError, NoParserError};
pub use json::JsonParser;
pub use registry::{ExtensionRegistry, RegistryWarning, build_registry};
pub use source::{NamedFile, NamedReader, SourceFile};
pub use text::TextParser;

use std::any::TypeId;
use std::fmt;

/// Core trait that all parser instances implement
pub trait Parser {
    /// Decode one open file into a definition
    ///
    /// # Arguments
    /// * `file` - Caller-owned handle; read from it, never close it
    ///
    /// # Returns
    /// The definition produced from the file contents
    fn load_from_file(&mut self, file: &mut dyn SourceFile) -> anyhow::Result<Definition>;
}

/// A concrete parser type that can be registered by extension
///
/// # Example
/// ```ignore
/// impl ParserKind for CsvParser {
///     const NAME: &'static str = "csv";
///     const EXTENSIONS: &'static [&'static str] = &[".csv"];
///
///     fn new() -> anyhow::Result<Self> {
///         Ok(CsvParser)
///     }
/// }
/// ```
pub trait ParserKind: Parser + Sized + 'static {
    /// Human-readable parser name
    const NAME: &'static str;

    /// Extensions handled, including the leading dot (e.g. ".json")
    const EXTENSIONS: &'static [&'static str];

    /// Construct a fresh parser instance
    fn new() -> anyhow::Result<Self>;
}

/// Handle to a registered parser type
///
/// Two classes are equal only when they refer to the same Rust type.
#[derive(Clone, Copy)]
pub struct ParserClass {
    id: TypeId,
    name: &'static str,
    extensions: &'static [&'static str],
    construct: fn() -> anyhow::Result<Box<dyn Parser>>,
}

impl ParserClass {
    /// Class handle for parser type `P`
    pub fn of<P: ParserKind>() -> Self {
        Self {
            id: TypeId::of::<P>(),
            name: P::NAME,
            extensions: P::EXTENSIONS,
            construct: construct::<P>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Build a new parser instance; constructor errors are returned as-is
    pub fn instantiate(&self) -> anyhow::Result<Box<dyn Parser>> {
        (self.construct)()
    }
}

fn construct<P: ParserKind>() -> anyhow::Result<Box<dyn Parser>> {
    Ok(Box::new(P::new()?))
}

impl PartialEq for ParserClass {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ParserClass {}

impl fmt::Debug for ParserClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserClass")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .finish()
    }
}

impl fmt::Display for ParserClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
