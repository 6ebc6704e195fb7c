// BaseExtractor implementation for Pothos Locate
//
// Holds the per-file state every extraction needs: which file is being read,
// its source text, and the receiver identifier builder calls must use.

use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::Node;

/// Base implementation shared by the schema extractors
pub struct BaseExtractor {
    pub file_name: PathBuf,
    pub content: String,
    pub receiver: String,
}

impl BaseExtractor {
    pub fn new(file_name: &Path, content: String, receiver: &str) -> Self {
        debug!(
            "BaseExtractor for '{}' (receiver '{}')",
            file_name.display(),
            receiver
        );

        Self {
            file_name: file_name.to_path_buf(),
            content,
            receiver: receiver.to_string(),
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Start position of a node as (1-based line, 0-based column)
    ///
    /// tree-sitter only breaks rows at `\n` and reports columns in bytes.
    /// JavaScript also ends lines at a lone `\r`, U+2028 and U+2029, and
    /// editors count columns in UTF-16 code units, so both are re-measured
    /// over the source prefix.
    pub fn start_position(&self, node: &Node) -> (u32, u32) {
        let start_byte = node.start_byte();
        let Some(prefix) = self.content.get(..start_byte) else {
            let point = node.start_position();
            return ((point.row + 1) as u32, point.column as u32);
        };

        let mut line = 1;
        let mut line_start = 0;
        let mut chars = prefix.char_indices().peekable();
        while let Some((index, ch)) = chars.next() {
            let is_terminator = match ch {
                // `\r\n` is a single terminator, counted at the `\n`
                '\r' => !matches!(chars.peek(), Some((_, '\n'))),
                '\n' | '\u{2028}' | '\u{2029}' => true,
                _ => false,
            };
            if is_terminator {
                line += 1;
                line_start = index + ch.len_utf8();
            }
        }

        let column = prefix[line_start..].encode_utf16().count();
        (line, column as u32)
    }

    /// Decode the value of a `string` literal node
    ///
    /// Returns `None` for anything that is not a plain string literal
    /// (template strings, identifiers, calls, ...).
    pub fn string_literal_value(&self, node: &Node) -> Option<String> {
        if node.kind() != "string" {
            return None;
        }

        let mut value = String::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "string_fragment" => value.push_str(&self.get_node_text(&child)),
                "escape_sequence" => {
                    decode_escape(&self.get_node_text(&child), &mut value);
                }
                // HTML character references inside JSX-flavoured strings are kept verbatim
                _ => value.push_str(&self.get_node_text(&child)),
            }
        }
        Some(value)
    }

    /// Is this node the configured receiver identifier?
    pub fn is_receiver(&self, node: &Node) -> bool {
        node.kind() == "identifier" && self.get_node_text(node) == self.receiver
    }
}

/// Append the character(s) an escape sequence denotes
fn decode_escape(escape: &str, out: &mut String) {
    let body = escape.strip_prefix('\\').unwrap_or(escape);
    let mut chars = body.chars();
    match chars.next() {
        Some('n') => out.push('\n'),
        Some('r') => out.push('\r'),
        Some('t') => out.push('\t'),
        Some('b') => out.push('\u{8}'),
        Some('f') => out.push('\u{c}'),
        Some('v') => out.push('\u{b}'),
        Some('0') if body.len() == 1 => out.push('\0'),
        Some('x') => push_code_point(&body[1..], out, escape),
        Some('u') => {
            let hex = body[1..].trim_start_matches('{').trim_end_matches('}');
            push_code_point(hex, out, escape);
        }
        // Line continuation
        Some('\n') | Some('\r') | Some('\u{2028}') | Some('\u{2029}') => {}
        Some(other) => out.push(other),
        None => {}
    }
}

fn push_code_point(hex: &str, out: &mut String, original: &str) {
    match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
        Some(c) => out.push(c),
        None => out.push_str(original),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_common_escapes() {
        let mut out = String::new();
        for escape in [r"\'", r"\n", r"\\", r"\x41", r"B", r"\u{43}"] {
            decode_escape(escape, &mut out);
        }
        assert_eq!(out, "'\n\\ABC");
    }

    #[test]
    fn test_invalid_code_point_is_kept_verbatim() {
        let mut out = String::new();
        decode_escape(r"\uD800", &mut out);
        assert_eq!(out, r"\uD800");
    }
}
