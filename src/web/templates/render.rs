// ABOUTME: Renderer that executes a parsed template tree against a JSON context
// ABOUTME: Scope lookup, truthiness, list iteration, and HTML escaping of every interpolated value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

use super::parser::{Node, Path};
use serde_json::Value;
use thiserror::Error;

static NULL: Value = Value::Null;

/// Template execution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A path segment names a key the object does not have
    #[error("`{path}`: no field `{segment}`")]
    MissingField {
        /// Full path as written
        path: String,
        /// Segment that failed
        segment: String,
    },
    /// A path walks through `null` or a scalar
    #[error("`{path}`: cannot read `{segment}` of {found}")]
    NotAnObject {
        /// Full path as written
        path: String,
        /// Segment that failed
        segment: String,
        /// JSON kind found instead
        found: &'static str,
    },
    /// `{{ path }}` resolved to a list or object
    #[error("`{path}` is {found} and cannot be printed")]
    NotPrintable {
        /// Full path as written
        path: String,
        /// JSON kind found
        found: &'static str,
    },
    /// `{{#each}}` over something other than a list
    #[error("`{path}` is {found}, expected a list")]
    NotIterable {
        /// Full path as written
        path: String,
        /// JSON kind found
        found: &'static str,
    },
}

/// Render `nodes` with `context` as the outermost scope
///
/// # Errors
///
/// Returns the first execution error; nothing is returned on failure
pub fn render(nodes: &[Node], context: &Value) -> Result<String, RenderError> {
    let mut out = String::new();
    let mut scopes = vec![context];
    render_nodes(nodes, &mut scopes, &mut out)?;
    Ok(out)
}

fn render_nodes<'a>(
    nodes: &'a [Node],
    scopes: &mut Vec<&'a Value>,
    out: &mut String,
) -> Result<(), RenderError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Value(path) => write_value(path, resolve(path, scopes)?, out)?,
            Node::If {
                condition,
                then,
                otherwise,
            } => {
                let branch = if is_truthy(resolve(condition, scopes)?) {
                    then
                } else {
                    otherwise
                };
                render_nodes(branch, scopes, out)?;
            }
            Node::Each { list, body } => match resolve(list, scopes)? {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        scopes.push(item);
                        let result = render_nodes(body, scopes, out);
                        scopes.pop();
                        result?;
                    }
                }
                other => {
                    return Err(RenderError::NotIterable {
                        path: list.to_string(),
                        found: kind(other),
                    })
                }
            },
        }
    }
    Ok(())
}

/// Find the value a path names
///
/// Anchored paths start at the innermost scope. Otherwise the first segment is
/// looked up in each enclosing object scope, innermost first.
fn resolve<'a>(path: &Path, scopes: &[&'a Value]) -> Result<&'a Value, RenderError> {
    let Some(&innermost) = scopes.last() else {
        return Ok(&NULL);
    };

    let (mut value, rest) = if path.anchored {
        (innermost, path.segments.as_slice())
    } else {
        let Some((first, rest)) = path.segments.split_first() else {
            return Ok(innermost);
        };
        let found = scopes
            .iter()
            .rev()
            .find_map(|scope| scope.as_object().and_then(|map| map.get(first)));
        let Some(found) = found else {
            return Err(RenderError::MissingField {
                path: path.to_string(),
                segment: first.clone(),
            });
        };
        (found, rest)
    };

    for segment in rest {
        let Value::Object(map) = value else {
            return Err(RenderError::NotAnObject {
                path: path.to_string(),
                segment: segment.clone(),
                found: kind(value),
            });
        };
        value = map.get(segment).ok_or_else(|| RenderError::MissingField {
            path: path.to_string(),
            segment: segment.clone(),
        })?;
    }
    Ok(value)
}

fn write_value(path: &Path, value: &Value, out: &mut String) -> Result<(), RenderError> {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => {
            html_escape::encode_double_quoted_attribute_to_string(s, out);
        }
        Value::Array(_) | Value::Object(_) => {
            return Err(RenderError::NotPrintable {
                path: path.to_string(),
                found: kind(value),
            })
        }
    }
    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
