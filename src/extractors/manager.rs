//! ExtractorManager - Public API for location extraction
//!
//! Handles file parsing and delegates to the Pothos extractor. Parsing sits
//! behind the [`SyntaxParser`] trait so the extractor only depends on
//! "text in, position-annotated tree out".

use crate::error::{LocateError, Result};
use crate::extractors::base::{BaseExtractor, LocationMap};
use crate::extractors::pothos::PothosExtractor;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;
use tree_sitter::{Parser, Tree};

/// Receiver identifier used when none is configured
pub const DEFAULT_RECEIVER: &str = "builder";

/// Turns source text into a syntax tree
///
/// A tree containing syntax errors is a failure: callers never see a
/// partially understood file.
pub trait SyntaxParser {
    fn parse(&mut self, file_name: &Path, source: &str) -> Result<Tree>;
}

/// tree-sitter backed parser, one `Parser` per grammar
#[derive(Default)]
pub struct TreeSitterParser {
    parsers: HashMap<&'static str, Parser>,
}

impl TreeSitterParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn parser_for(&mut self, language: &'static str) -> Result<&mut Parser> {
        if !self.parsers.contains_key(language) {
            let mut parser = Parser::new();
            let tree_sitter_language = crate::language::get_tree_sitter_language(language)?;
            parser
                .set_language(&tree_sitter_language)
                .map_err(|e| LocateError::Grammar {
                    language: language.to_string(),
                    message: e.to_string(),
                })?;
            self.parsers.insert(language, parser);
        }

        self.parsers
            .get_mut(language)
            .ok_or_else(|| LocateError::Grammar {
                language: language.to_string(),
                message: "parser was not initialized".to_string(),
            })
    }
}

impl SyntaxParser for TreeSitterParser {
    fn parse(&mut self, file_name: &Path, source: &str) -> Result<Tree> {
        let language = crate::language::language_for_path(file_name);
        let parser = self.parser_for(language)?;

        let tree = parser.parse(source, None).ok_or_else(|| LocateError::Parse {
            file: file_name.to_path_buf(),
            line: 1,
            column: 0,
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let probe = BaseExtractor::new(file_name, source.to_string(), "");
            let (line, column) = probe
                .first_error_node(&root)
                .map(|node| probe.start_position(&node))
                .unwrap_or((1, 0));
            return Err(LocateError::Parse {
                file: file_name.to_path_buf(),
                line,
                column,
            });
        }

        Ok(tree)
    }
}

/// Manager for location extraction
pub struct ExtractorManager<P: SyntaxParser = TreeSitterParser> {
    parser: P,
    receiver: String,
}

impl ExtractorManager<TreeSitterParser> {
    pub fn new(receiver: &str) -> Self {
        Self::with_parser(TreeSitterParser::new(), receiver)
    }
}

impl Default for ExtractorManager<TreeSitterParser> {
    fn default() -> Self {
        Self::new(DEFAULT_RECEIVER)
    }
}

impl<P: SyntaxParser> ExtractorManager<P> {
    pub fn with_parser(parser: P, receiver: &str) -> Self {
        Self {
            parser,
            receiver: receiver.to_string(),
        }
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Parse `content` and write every recognized declaration into `locations`
    ///
    /// Fails without touching `locations` when the file does not parse.
    pub fn extract_locations(
        &mut self,
        locations: &mut LocationMap,
        file_name: &Path,
        content: &str,
    ) -> Result<usize> {
        let tree = self.parser.parse(file_name, content)?;

        let extractor = PothosExtractor::new(file_name, content.to_string(), &self.receiver);
        let before = locations.len();
        let recognized = extractor.extract_locations(&tree, locations);

        debug!(
            "Extracted {} new keys ({} builder calls) from {}",
            locations.len().saturating_sub(before),
            recognized,
            file_name.display()
        );
        Ok(recognized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extracts_with_default_receiver() {
        let mut manager = ExtractorManager::new(DEFAULT_RECEIVER);
        let mut locations = LocationMap::new();
        let file = PathBuf::from("/project/schema.ts");

        let recognized = manager
            .extract_locations(
                &mut locations,
                &file,
                "builder.mutationField('createMap', () => null);\n",
            )
            .unwrap();

        assert_eq!(recognized, 1);
        let record = locations.get("Mutation.createMap").unwrap();
        assert_eq!(record.file_name, file);
        assert_eq!((record.line, record.column), (1, 22));
    }

    #[test]
    fn test_parse_failure_is_an_error_and_leaves_map_untouched() {
        let mut manager = ExtractorManager::new(DEFAULT_RECEIVER);
        let mut locations = LocationMap::new();

        let result = manager.extract_locations(
            &mut locations,
            Path::new("/project/broken.ts"),
            "builder.mutationField('ok', () => null);\nconst = ;\n",
        );

        match result {
            Err(LocateError::Parse { file, line, .. }) => {
                assert_eq!(file, PathBuf::from("/project/broken.ts"));
                assert_eq!(line, 2);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(locations.is_empty());
    }

    #[test]
    fn test_jsx_in_unknown_extension_parses_as_tsx() {
        let mut manager = ExtractorManager::new(DEFAULT_RECEIVER);
        let mut locations = LocationMap::new();

        manager
            .extract_locations(
                &mut locations,
                Path::new("/project/View.fixture"),
                "const view = <div />;\nbuilder.mutationField('render', () => null);\n",
            )
            .unwrap();

        assert!(locations.contains_key("Mutation.render"));
    }

    struct FailingParser;

    impl SyntaxParser for FailingParser {
        fn parse(&mut self, file_name: &Path, _source: &str) -> Result<Tree> {
            Err(LocateError::Parse {
                file: file_name.to_path_buf(),
                line: 7,
                column: 3,
            })
        }
    }

    #[test]
    fn test_custom_parser_is_used() {
        let mut manager = ExtractorManager::with_parser(FailingParser, "builder");
        let mut locations = LocationMap::new();

        let err = manager
            .extract_locations(&mut locations, Path::new("/x.ts"), "anything")
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to parse /x.ts:7:3");
        assert_eq!(manager.receiver(), "builder");
    }
}
