use super::{Definition, Parser, ParserKind, SourceFile};
use anyhow::Context;

/// JSON documents, decoded whole
pub struct JsonParser;

impl Parser for JsonParser {
    fn load_from_file(&mut self, file: &mut dyn SourceFile) -> anyhow::Result<Definition> {
        let name = file.name().to_string();
        let content: serde_json::Value = serde_json::from_reader(file)
            .with_context(|| format!("Invalid JSON in {}", name))?;

        Ok(Definition::new(name, Self::NAME, content))
    }
}

impl ParserKind for JsonParser {
    const NAME: &'static str = "json";
    const EXTENSIONS: &'static [&'static str] = &[".json"];

    fn new() -> anyhow::Result<Self> {
        Ok(JsonParser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::NamedReader;
    use std::io::Cursor;

    #[test]
    fn test_parse_object() {
        let mut file = NamedReader::new("schema.json", Cursor::new(r#"{"type": "object"}"#));
        let definition = JsonParser.load_from_file(&mut file).unwrap();

        assert_eq!(definition.source, "schema.json");
        assert_eq!(definition.parser, "json");
        assert_eq!(definition.content["type"], "object");
    }

    #[test]
    fn test_invalid_json_names_file() {
        let mut file = NamedReader::new("broken.json", Cursor::new("{not json"));
        let err = JsonParser.load_from_file(&mut file).unwrap_err();

        assert!(err.to_string().contains("broken.json"));
    }
}
