use super::{ParserClass, ParserKind};
use std::fmt;
use std::sync::Arc;

type Loader = Arc<dyn Fn() -> anyhow::Result<ParserClass> + Send + Sync>;

/// Named, lazily-resolved reference to a parser class
///
/// Resolution may fail independently per descriptor (for example when the
/// parser depends on something unavailable at runtime).
#[derive(Clone)]
pub struct ParserDescriptor {
    name: String,
    loader: Loader,
}

impl ParserDescriptor {
    /// Descriptor with a custom loader
    pub fn new<F>(name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> anyhow::Result<ParserClass> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            loader: Arc::new(loader),
        }
    }

    /// Descriptor that always resolves to `P`
    pub fn of<P: ParserKind>(name: impl Into<String>) -> Self {
        Self::new(name, || Ok(ParserClass::of::<P>()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the referenced parser class
    pub fn load(&self) -> anyhow::Result<ParserClass> {
        (self.loader)()
    }
}

impl fmt::Debug for ParserDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Source of parser descriptors, injected at startup
pub trait ParserProvider {
    /// Descriptors in the order they should be registered
    fn descriptors(&self) -> Vec<ParserDescriptor>;
}

/// Provider backed by a fixed registration list
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    entries: Vec<ParserDescriptor>,
}

impl StaticProvider {
    pub fn new(entries: Vec<ParserDescriptor>) -> Self {
        Self { entries }
    }

    pub fn with(mut self, descriptor: ParserDescriptor) -> Self {
        self.entries.push(descriptor);
        self
    }
}

impl ParserProvider for StaticProvider {
    fn descriptors(&self) -> Vec<ParserDescriptor> {
        self.entries.clone()
    }
}
