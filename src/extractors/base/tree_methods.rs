// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor {
    /// Walk tree with visitor, parents before children
    #[allow(clippy::only_used_in_recursion)] // &self used in recursive calls
    pub fn walk_tree<'a, F>(&self, node: &Node<'a>, visitor: &mut F)
    where
        F: FnMut(&Node<'a>),
    {
        visitor(node);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk_tree(&child, visitor);
        }
    }

    /// Find nodes by type, in document order
    pub fn find_nodes_by_type<'a>(&self, node: &Node<'a>, node_type: &str) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        self.walk_tree(node, &mut |candidate: &Node<'a>| {
            if candidate.kind() == node_type {
                nodes.push(*candidate);
            }
        });
        nodes
    }

    /// First `ERROR` or `MISSING` node in document order
    pub fn first_error_node<'a>(&self, node: &Node<'a>) -> Option<Node<'a>> {
        if node.is_error() || node.is_missing() {
            return Some(*node);
        }
        if !node.has_error() {
            return None;
        }

        let mut cursor = node.walk();
        let children: Vec<Node<'a>> = node.children(&mut cursor).collect();
        for child in &children {
            if let Some(error) = self.first_error_node(child) {
                return Some(error);
            }
        }
        None
    }

    /// Named children that carry meaning (comments are extras and skipped)
    pub fn meaningful_children<'a>(&self, node: &Node<'a>) -> Vec<Node<'a>> {
        let mut cursor = node.walk();
        let children: Vec<Node<'a>> = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .collect();
        children
    }

    /// Strip any number of wrapping parentheses: `((x))` -> `x`
    pub fn unwrap_parenthesized<'a>(&self, node: Node<'a>) -> Node<'a> {
        let mut current = node;
        while current.kind() == "parenthesized_expression" {
            match self.meaningful_children(&current).first() {
                Some(inner) => current = *inner,
                None => break,
            }
        }
        current
    }

    /// Get field node with wrapping parentheses removed
    pub fn field_value<'a>(&self, node: &Node<'a>, field_name: &str) -> Option<Node<'a>> {
        node.child_by_field_name(field_name)
            .map(|value| self.unwrap_parenthesized(value))
    }
}
