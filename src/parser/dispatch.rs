use super::{Definition, DispatchError, ExtensionRegistry, NoParserError, Parser, SourceFile};
use tracing::debug;

/// Extension of a file name, including the leading dot
///
/// Only the text after the last `/` counts, and leading dots there do not
/// start an extension: `"a/b.tar.gz"` -> `".gz"`, `".bashrc"` -> `""`,
/// `"..a"` -> `""`, `"a.b/"` -> `""`, `"notes."` -> `"."`. Case is preserved.
pub fn extension_of(name: &str) -> String {
    let base = name.rsplit('/').next().unwrap_or(name);
    let stem = base.trim_start_matches('.');

    match stem.rfind('.') {
        Some(idx) => stem[idx..].to_string(),
        None => String::new(),
    }
}

impl ExtensionRegistry {
    /// Instantiate the parser registered for `file`'s extension
    pub fn resolve_parser<F>(&self, file: &F) -> Result<Box<dyn Parser>, DispatchError>
    where
        F: SourceFile + ?Sized,
    {
        let extension = extension_of(file.name());
        let class = self.get(&extension).ok_or_else(|| NoParserError {
            filename: file.name().to_string(),
            extensions: self.extensions(),
        })?;

        debug!(file = file.name(), parser = class.name(), "Resolved parser");
        class.instantiate().map_err(DispatchError::Parser)
    }

    /// Load every file in order, one definition per file
    ///
    /// All-or-nothing: the first file without a parser, or the first parser
    /// failure, aborts the batch and nothing is returned.
    pub fn parse_files<F: SourceFile>(
        &self,
        files: &mut [F],
    ) -> Result<Vec<Definition>, DispatchError> {
        files
            .iter_mut()
            .map(|file| {
                let mut parser = self.resolve_parser(&*file)?;
                parser.load_from_file(file).map_err(DispatchError::Parser)
            })
            .collect()
    }
}

/// Combine several definitions into one
///
/// Currently keeps the first definition and ignores the rest.
pub fn merge_definitions(definitions: Vec<Definition>) -> Result<Definition, DispatchError> {
    definitions.into_iter().next().ok_or(DispatchError::EmptyMerge)
}
