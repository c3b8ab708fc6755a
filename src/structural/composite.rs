//! Composite: files and directories share one `Node` type, so size and
//! rendering recurse without the caller caring which is which.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File { name: String, size: u64 },
    Directory { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Node::File {
            name: name.into(),
            size,
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Directory { name, .. } => name,
        }
    }

    /// Adds a child; leaves refuse and hand the node back.
    pub fn add(&mut self, child: Node) -> Result<(), Node> {
        match self {
            Node::Directory { children, .. } => {
                children.push(child);
                Ok(())
            }
            Node::File { .. } => Err(child),
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Node::File { size, .. } => *size,
            Node::Directory { children, .. } => children.iter().map(Node::size).sum(),
        }
    }

    pub fn file_count(&self) -> usize {
        match self {
            Node::File { .. } => 1,
            Node::Directory { children, .. } => children.iter().map(Node::file_count).sum(),
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(0, &mut lines);
        lines
    }

    fn render_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self {
            Node::File { name, size } => lines.push(format!("{indent}{name} ({size} B)")),
            Node::Directory { name, children } => {
                lines.push(format!("{indent}{name}/ ({} B)", self.size()));
                for child in children {
                    child.render_into(depth + 1, lines);
                }
            }
        }
    }
}

pub fn sample_tree() -> Node {
    Node::dir(
        "project",
        vec![
            Node::dir(
                "src",
                vec![Node::file("main.rs", 1200), Node::file("lib.rs", 800)],
            ),
            Node::dir("docs", vec![Node::file("guide.md", 3000)]),
        ],
    )
}

pub struct CompositePattern;

impl Pattern for CompositePattern {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn intent(&self) -> &'static str {
        "Compose objects into trees and treat individual objects and compositions uniformly."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Component", "Node"),
            Participant::new("Leaf", "Node::File"),
            Participant::new("Composite", "Node::Directory"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Composite")?;

        let tree = sample_tree();
        for line in tree.render() {
            writeln!(out, "{line}")?;
        }
        writeln!(
            out,
            "Total: {} files, {} bytes",
            tree.file_count(),
            tree.size()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_recurses() {
        let tree = sample_tree();
        assert_eq!(tree.size(), 5000);
        assert_eq!(tree.file_count(), 3);
        assert_eq!(Node::file("a", 7).size(), 7);
        assert_eq!(Node::dir("empty", vec![]).size(), 0);
    }

    #[test]
    fn test_render_two_branches() {
        assert_eq!(
            sample_tree().render(),
            vec![
                "project/ (5000 B)",
                "  src/ (2000 B)",
                "    main.rs (1200 B)",
                "    lib.rs (800 B)",
                "  docs/ (3000 B)",
                "    guide.md (3000 B)",
            ]
        );
    }

    #[test]
    fn test_leaf_rejects_children() {
        let mut leaf = Node::file("a.txt", 1);
        let rejected = leaf.add(Node::file("b.txt", 2)).unwrap_err();
        assert_eq!(rejected.name(), "b.txt");

        let mut dir = Node::dir("d", vec![]);
        dir.add(Node::file("b.txt", 2)).unwrap();
        assert_eq!(dir.size(), 2);
    }
}
