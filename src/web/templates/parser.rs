// ABOUTME: Parser for the frontend's HTML template language
// ABOUTME: Turns {{ value }}, {{#if}}, {{#each}}, and {{! comments }} into a node tree at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! Template syntax
//!
//! | Tag                         | Meaning                                          |
//! |-----------------------------|--------------------------------------------------|
//! | `{{ path }}`                | HTML-escaped value; `path` is dotted             |
//! | `{{#if path}}` / `{{/if}}`  | conditional block, optional `{{else}}`           |
//! | `{{#each path}}`/`{{/each}}`| repeat the block for every item of a list        |
//! | `{{! text }}`               | comment, dropped                                 |
//!
//! `this` names the innermost scope, which inside `{{#each}}` is the current item.

use std::fmt;
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A reference to a value in the render context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Starts at the innermost scope (`this`) instead of searching outward
    pub anchored: bool,
    /// Keys walked from the starting value
    pub segments: Vec<String>,
}

impl Path {
    fn parse(raw: &str, line: usize) -> Result<Self, ParseError> {
        let mut segments: Vec<String> = raw.split('.').map(str::to_owned).collect();
        if segments.iter().any(|s| !is_identifier(s)) {
            return Err(ParseError::InvalidPath {
                path: raw.to_owned(),
                line,
            });
        }

        let anchored = segments.first().is_some_and(|s| s == "this");
        if anchored {
            segments.remove(0);
        }
        Ok(Self { anchored, segments })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.anchored, self.segments.is_empty()) {
            (true, true) => f.write_str("this"),
            (true, false) => write!(f, "this.{}", self.segments.join(".")),
            (false, _) => f.write_str(&self.segments.join(".")),
        }
    }
}

fn is_identifier(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// One node of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text copied to the output
    Text(String),
    /// Escaped interpolation
    Value(Path),
    /// Conditional block
    If {
        /// Tested for truthiness
        condition: Path,
        /// Rendered when truthy
        then: Vec<Node>,
        /// Rendered when falsy
        otherwise: Vec<Node>,
    },
    /// Loop over a list
    Each {
        /// Must resolve to a list (or null, rendering nothing)
        list: Path,
        /// Rendered once per item
        body: Vec<Node>,
    },
}

/// Template syntax errors, reported with the 1-based line of the offending tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `{{` without a matching `}}`
    #[error("unclosed tag on line {line}")]
    UnclosedTag {
        /// Line of the opening braces
        line: usize,
    },
    /// `{{}}` with nothing inside
    #[error("empty tag on line {line}")]
    EmptyTag {
        /// Line of the tag
        line: usize,
    },
    /// Path with an empty or non-identifier segment
    #[error("invalid path `{path}` on line {line}")]
    InvalidPath {
        /// Path as written
        path: String,
        /// Line of the tag
        line: usize,
    },
    /// `{{#name}}` for an unknown block helper
    #[error("unknown block `{name}` on line {line}")]
    UnknownBlock {
        /// Helper as written
        name: String,
        /// Line of the tag
        line: usize,
    },
    /// `{{/name}}` that does not close the innermost open block
    #[error("unexpected `{{{{/{found}}}}}` on line {line}")]
    UnexpectedClose {
        /// Closing tag as written
        found: String,
        /// Line of the tag
        line: usize,
    },
    /// `{{else}}` outside an `{{#if}}` or repeated
    #[error("unexpected `{{{{else}}}}` on line {line}")]
    UnexpectedElse {
        /// Line of the tag
        line: usize,
    },
    /// End of input with a block still open
    #[error("`{{{{#{block}}}}}` opened on line {line} is never closed")]
    UnclosedBlock {
        /// Block helper
        block: &'static str,
        /// Line of the opening tag
        line: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    If,
    Each,
}

impl BlockKind {
    const fn name(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Each => "each",
        }
    }
}

/// A block opened but not yet closed
struct OpenBlock {
    kind: BlockKind,
    path: Path,
    line: usize,
    primary: Vec<Node>,
    alternate: Option<Vec<Node>>,
}

impl OpenBlock {
    fn into_node(self) -> Node {
        match self.kind {
            BlockKind::If => Node::If {
                condition: self.path,
                then: self.primary,
                otherwise: self.alternate.unwrap_or_default(),
            },
            BlockKind::Each => Node::Each {
                list: self.path,
                body: self.primary,
            },
        }
    }
}

/// Parse template source into a node tree
///
/// # Errors
///
/// Returns the first syntax error found
pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    let mut root = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find(OPEN) {
        let line = line_of(source, rest, start);
        push_text(current(&mut root, &mut stack), &rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or(ParseError::UnclosedTag { line })?;
        let tag = after_open[..end].trim();
        rest = &after_open[end + CLOSE.len()..];

        if tag.is_empty() {
            return Err(ParseError::EmptyTag { line });
        }

        if tag.starts_with('!') {
            continue;
        }

        if let Some(open) = tag.strip_prefix('#') {
            let (name, argument) = open.split_once(char::is_whitespace).unwrap_or((open, ""));
            let kind = match name {
                "if" => BlockKind::If,
                "each" => BlockKind::Each,
                other => {
                    return Err(ParseError::UnknownBlock {
                        name: other.to_owned(),
                        line,
                    })
                }
            };
            stack.push(OpenBlock {
                kind,
                path: Path::parse(argument.trim(), line)?,
                line,
                primary: Vec::new(),
                alternate: None,
            });
            continue;
        }

        if let Some(name) = tag.strip_prefix('/') {
            let name = name.trim();
            let block = match stack.pop() {
                Some(block) if block.kind.name() == name => block,
                _ => {
                    return Err(ParseError::UnexpectedClose {
                        found: name.to_owned(),
                        line,
                    })
                }
            };
            current(&mut root, &mut stack).push(block.into_node());
            continue;
        }

        if tag == "else" {
            match stack.last_mut() {
                Some(block) if block.kind == BlockKind::If && block.alternate.is_none() => {
                    block.alternate = Some(Vec::new());
                }
                _ => return Err(ParseError::UnexpectedElse { line }),
            }
            continue;
        }

        let path = Path::parse(tag, line)?;
        current(&mut root, &mut stack).push(Node::Value(path));
    }

    if let Some(block) = stack.pop() {
        return Err(ParseError::UnclosedBlock {
            block: block.kind.name(),
            line: block.line,
        });
    }

    push_text(&mut root, rest);
    Ok(root)
}

/// Node list new nodes are appended to
fn current<'a>(root: &'a mut Vec<Node>, stack: &'a mut [OpenBlock]) -> &'a mut Vec<Node> {
    match stack.last_mut() {
        Some(OpenBlock {
            alternate: Some(alternate),
            ..
        }) => alternate,
        Some(block) => &mut block.primary,
        None => root,
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_owned()));
    }
}

/// 1-based line of `rest[offset]`, where `rest` is a suffix of `source`
fn line_of(source: &str, rest: &str, offset: usize) -> usize {
    let consumed = source.len() - rest.len() + offset;
    source[..consumed].matches('\n').count() + 1
}
