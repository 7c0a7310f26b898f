//! Tree-sitter parser implementation
//!
//! tree-sitter recovers from syntax errors; a module graph built on a
//! recovered tree would silently miss imports, so any ERROR or MISSING node
//! is reported as a parse failure instead.

use std::path::PathBuf;

use tree_sitter::Parser as TSParser;

use crate::errors::{ModgraphError, Result};
use crate::features::parsing::domain::ParsedModule;
use crate::shared::utils::tree_sitter::{find_first_error, node_to_span};

/// Tree-sitter based Python parser
///
/// Holds one tree-sitter parser and reuses it for every file.
pub struct PythonParser {
    parser: TSParser,
}

impl PythonParser {
    /// Create a Python parser
    pub fn new() -> Result<Self> {
        let mut parser = TSParser::new();
        let language = tree_sitter_python::language();
        parser
            .set_language(&language)
            .map_err(|e| ModgraphError::Grammar(format!("Failed to set language: {}", e)))?;

        Ok(Self { parser })
    }

    /// Parse `source`, read from `path`, into a [`ParsedModule`]
    pub fn parse(&mut self, path: impl Into<PathBuf>, source: String) -> Result<ParsedModule> {
        let path = path.into();
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ModgraphError::parse_error(&path, "parser produced no tree"))?;

        if let Some(error) = find_first_error(&tree.root_node()) {
            let message = if error.is_missing() {
                format!("missing {} at {}", error.kind(), node_to_span(&error).start())
            } else {
                format!("syntax error at {}", node_to_span(&error).start())
            };
            return Err(ModgraphError::parse_error(path, message));
        }

        Ok(ParsedModule::new(path, source, tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_module() {
        let mut parser = PythonParser::new().unwrap();
        let parsed = parser
            .parse("pkg/mod.py", "import os\n\ndef f():\n    return os.sep\n".to_string())
            .unwrap();
        assert_eq!(parsed.root_node().kind(), "module");
        assert_eq!(parsed.path(), PathBuf::from("pkg/mod.py").as_path());
    }

    #[test]
    fn test_parse_empty_module() {
        let mut parser = PythonParser::new().unwrap();
        let parsed = parser.parse("empty.py", String::new()).unwrap();
        assert_eq!(parsed.root_node().named_child_count(), 0);
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        let mut parser = PythonParser::new().unwrap();
        let err = parser
            .parse("broken.py", "def broken(:\n    pass\n".to_string())
            .unwrap_err();
        match err {
            ModgraphError::Parse { path, message } => {
                assert_eq!(path, PathBuf::from("broken.py"));
                assert!(
                    message.starts_with("syntax error at") || message.starts_with("missing"),
                    "unexpected message: {message}"
                );
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parser_is_reusable_after_error() {
        let mut parser = PythonParser::new().unwrap();
        assert!(parser.parse("a.py", "class :\n".to_string()).is_err());
        assert!(parser.parse("b.py", "x = 1\n".to_string()).is_ok());
    }
}
