use super::{ParserClass, ParserDescriptor, ParserProvider};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::{debug, info, warn};

/// Non-fatal problem found while building the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryWarning {
    /// A descriptor could not be resolved; none of its extensions are registered
    DescriptorLoadFailure { name: String, reason: String },
    /// A second parser claimed an extension; the first binding was kept
    ExtensionConflict {
        extension: String,
        rejected: String,
        current: String,
    },
}

impl fmt::Display for RegistryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DescriptorLoadFailure { name, reason } => write!(
                f,
                "Exception while loading generix parser {:?}. It won't be available. \
                 Exception was: {}",
                name, reason
            ),
            Self::ExtensionConflict {
                extension,
                rejected,
                current,
            } => write!(
                f,
                "Could not register extension {:?} with parser {:?} as it is already \
                 registered with a different parser ({:?}).",
                extension, rejected, current
            ),
        }
    }
}

/// Immutable extension -> parser class table
///
/// Built once by [`build_registry`]; the first class to claim an extension owns it.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    /// Extension (with leading dot) -> parser class
    map: HashMap<String, ParserClass>,
    /// Problems encountered while building, in the order they occurred
    warnings: Vec<RegistryWarning>,
}

/// Build the registry from descriptors, in order
///
/// Never fails: unresolvable descriptors and conflicting extensions are
/// logged, recorded as warnings and skipped.
pub fn build_registry(descriptors: &[ParserDescriptor]) -> ExtensionRegistry {
    let mut registry = ExtensionRegistry::default();

    for descriptor in descriptors {
        let class = match descriptor.load() {
            Ok(class) => class,
            Err(err) => {
                registry.push_warning(RegistryWarning::DescriptorLoadFailure {
                    name: descriptor.name().to_string(),
                    reason: format!("{:#}", err),
                });
                continue;
            }
        };

        for extension in class.extensions() {
            registry.bind(extension, class);
        }
    }

    info!(
        extensions = registry.len(),
        warnings = registry.warnings.len(),
        "Parser registry built"
    );
    registry
}

impl ExtensionRegistry {
    /// Build from everything a provider supplies
    pub fn from_provider(provider: &dyn ParserProvider) -> Self {
        build_registry(&provider.descriptors())
    }

    fn bind(&mut self, extension: &str, class: ParserClass) {
        match self.map.get(extension) {
            None => {
                debug!(extension, parser = class.name(), "Registered extension");
                self.map.insert(extension.to_string(), class);
            }
            Some(current) if *current == class => {}
            Some(current) => {
                let warning = RegistryWarning::ExtensionConflict {
                    extension: extension.to_string(),
                    rejected: class.name().to_string(),
                    current: current.name().to_string(),
                };
                self.push_warning(warning);
            }
        }
    }

    fn push_warning(&mut self, warning: RegistryWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Parser class bound to an exact extension (e.g. ".json")
    pub fn get(&self, extension: &str) -> Option<ParserClass> {
        self.map.get(extension).copied()
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.map.contains_key(extension)
    }

    /// All registered extensions, sorted
    pub fn extensions(&self) -> BTreeSet<String> {
        self.map.keys().cloned().collect()
    }

    /// Number of registered extensions
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// (extension, class) pairs sorted by extension
    pub fn bindings(&self) -> Vec<(&str, ParserClass)> {
        let mut bindings: Vec<_> = self
            .map
            .iter()
            .map(|(ext, class)| (ext.as_str(), *class))
            .collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }

    /// Warnings recorded while building
    pub fn warnings(&self) -> &[RegistryWarning] {
        &self.warnings
    }
}

impl PartialEq for ExtensionRegistry {
    /// Registries are equal when they bind the same extensions to the same classes
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}
