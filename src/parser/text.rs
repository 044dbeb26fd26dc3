use super::{Definition, Parser, ParserKind, SourceFile};
use anyhow::Context;
use serde_json::json;

/// Plain text files: one entry per line
pub struct TextParser;

impl Parser for TextParser {
    fn load_from_file(&mut self, file: &mut dyn SourceFile) -> anyhow::Result<Definition> {
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read {}", file.name()))?;

        let text = match std::str::from_utf8(&bytes) {
            Ok(text) => text.to_string(),
            // Not UTF-8: keep printable ASCII only
            Err(_) => Self::extract_printable(&bytes),
        };

        let lines: Vec<&str> = text.lines().collect();
        let content = json!({
            "lines": lines,
            "line_count": lines.len(),
        });

        Ok(Definition::new(file.name(), Self::NAME, content))
    }
}

impl ParserKind for TextParser {
    const NAME: &'static str = "text";
    const EXTENSIONS: &'static [&'static str] = &[".txt", ".text"];

    fn new() -> anyhow::Result<Self> {
        Ok(TextParser)
    }
}

impl TextParser {
    fn extract_printable(bytes: &[u8]) -> String {
        bytes
            .iter()
            .filter(|&&b| b.is_ascii_graphic() || b.is_ascii_whitespace())
            .map(|&b| b as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::NamedReader;
    use std::io::Cursor;

    #[test]
    fn test_lines_and_count() {
        let mut file = NamedReader::new("notes.txt", Cursor::new("one\ntwo\nthree"));
        let definition = TextParser.load_from_file(&mut file).unwrap();

        assert_eq!(definition.source, "notes.txt");
        assert_eq!(definition.parser, "text");
        assert_eq!(definition.content["line_count"], 3);
        assert_eq!(definition.content["lines"][2], "three");
    }

    #[test]
    fn test_binary_keeps_printable() {
        let mut file = NamedReader::new("blob.txt", Cursor::new(vec![0xFF, b'o', b'k', 0x00]));
        let definition = TextParser.load_from_file(&mut file).unwrap();

        assert_eq!(definition.content["lines"][0], "ok");
    }
}
