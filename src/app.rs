use crate::config::GenerixConfig;
use crate::parser::{
    merge_definitions, Definition, DispatchError, ExtensionRegistry, NamedFile, ParserProvider,
    SourceFile,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Application context owning the parser registry
///
/// Build one at startup and pass it to whatever needs to parse files.
pub struct Generix {
    registry: ExtensionRegistry,
}

impl Generix {
    /// Build the registry from every descriptor the provider supplies
    pub fn new(provider: &dyn ParserProvider) -> Self {
        Self::with_config(provider, &GenerixConfig::default())
    }

    /// Build the registry from the provider, filtered by `config.parsers`
    pub fn with_config(provider: &dyn ParserProvider, config: &GenerixConfig) -> Self {
        let descriptors = config.select(provider.descriptors());
        Self {
            registry: crate::parser::build_registry(&descriptors),
        }
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    pub fn parse_files<F: SourceFile>(
        &self,
        files: &mut [F],
    ) -> Result<Vec<Definition>, DispatchError> {
        self.registry.parse_files(files)
    }

    /// Open each path and parse it; handles are closed once parsing finishes
    pub fn parse_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Definition>> {
        let mut files = paths
            .iter()
            .map(|path| {
                NamedFile::open(path)
                    .with_context(|| format!("Failed to open {}", path.as_ref().display()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(self.registry.parse_files(&mut files)?)
    }

    /// Parse the paths and merge the results into a single definition
    pub fn load_merged<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Definition> {
        let definitions = self.parse_paths(paths)?;
        Ok(merge_definitions(definitions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::BuiltinProvider;
    use std::fs;

    #[test]
    fn test_parse_paths_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("a.json");
        let text = dir.path().join("b.txt");
        fs::write(&json, r#"{"name": "a"}"#).unwrap();
        fs::write(&text, "hello\nworld\n").unwrap();

        let app = Generix::new(&BuiltinProvider);
        let definitions = app.parse_paths(&[&json, &text]).unwrap();

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].content["name"], "a");
        assert_eq!(definitions[1].content["line_count"], 2);
    }

    #[test]
    fn test_unsupported_path_fails_batch() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("a.json");
        let csv = dir.path().join("b.csv");
        fs::write(&json, "{}").unwrap();
        fs::write(&csv, "x,y\n").unwrap();

        let app = Generix::new(&BuiltinProvider);
        let err = app.parse_paths(&[&json, &csv]).unwrap_err();

        let no_parser = err.downcast_ref::<DispatchError>();
        assert!(matches!(no_parser, Some(DispatchError::NoParser(e)) if e.filename.ends_with("b.csv")));
    }

    #[test]
    fn test_missing_path() {
        let app = Generix::new(&BuiltinProvider);
        let err = app.parse_paths(&["/nonexistent/file.json"]).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }

    #[test]
    fn test_load_merged_keeps_first() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        fs::write(&first, r#"{"id": 1}"#).unwrap();
        fs::write(&second, r#"{"id": 2}"#).unwrap();

        let app = Generix::new(&BuiltinProvider);
        let merged = app.load_merged(&[&first, &second]).unwrap();
        assert_eq!(merged.content["id"], 1);
    }

    #[test]
    fn test_load_merged_empty() {
        let app = Generix::new(&BuiltinProvider);
        let paths: [&str; 0] = [];
        let err = app.load_merged(&paths).unwrap_err();
        assert!(matches!(err.downcast_ref::<DispatchError>(), Some(DispatchError::EmptyMerge)));
    }

    #[test]
    fn test_config_limits_parsers() {
        let config = GenerixConfig {
            parsers: Some(vec!["json".to_string()]),
            ..Default::default()
        };
        let app = Generix::with_config(&BuiltinProvider, &config);

        assert!(app.registry().contains(".json"));
        assert!(!app.registry().contains(".txt"));
    }
}
