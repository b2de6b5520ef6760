//! JSON path expression parsing and evaluation.
//!
//! Parses expressions like `$.published` or `$.items[0]['name']` and
//! evaluates them against a parsed JSON document. The supported surface is
//! the subset the enrichment stage needs: root, dotted member access,
//! bracketed (quoted) member access, and bracketed array indices.

use serde_json::Value;
use sl_error::{EnrichError, Result};

/// A single step of a parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// Object member access (e.g., "published" from `$.published`)
    Key(String),
    /// Array index access (e.g., 0 from `$[0]`)
    Index(usize),
}

/// A parsed JSON path expression.
///
/// Bound once when the enricher is built and immutable thereafter; no
/// parsing happens per event.
///
/// # Expression Format
///
/// - `$` - the document root
/// - `.member` - object member access
/// - `['member']` / `["member"]` - quoted member access
/// - `[3]` - array index access
///
/// # Examples
///
/// ```
/// use sl_enrich::JsonPath;
///
/// let path = JsonPath::parse("$.params.v1").unwrap();
/// assert_eq!(path.expression(), "$.params.v1");
///
/// let indexed = JsonPath::parse("$.items[2]['id']").unwrap();
/// assert_eq!(indexed.expression(), "$.items[2]['id']");
/// ```
#[derive(Debug, Clone)]
pub struct JsonPath {
    /// The parsed path steps.
    steps: Vec<PathStep>,
    /// Original expression string for logging.
    original: String,
}

impl JsonPath {
    /// Parse a path expression string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The expression is empty or does not start with `$`
    /// - A dotted member name is empty (`$.`)
    /// - A bracket is unclosed or an unquoted bracket is not an index
    pub fn parse(expr: &str) -> Result<Self> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(EnrichError::InvalidPath("empty path expression".to_string()).into());
        }

        let chars: Vec<char> = expr.chars().collect();
        if chars[0] != '$' {
            return Err(EnrichError::InvalidPath(format!(
                "expression must start with '$': {expr}"
            ))
            .into());
        }

        let mut steps = Vec::new();
        let mut pos = 1;

        while pos < chars.len() {
            match chars[pos] {
                '.' => {
                    pos += 1;
                    let start = pos;
                    while pos < chars.len() && chars[pos] != '.' && chars[pos] != '[' {
                        pos += 1;
                    }
                    if start == pos {
                        return Err(EnrichError::InvalidPath(format!(
                            "empty member name in expression: {expr}"
                        ))
                        .into());
                    }
                    steps.push(PathStep::Key(chars[start..pos].iter().collect()));
                }
                '[' => {
                    pos += 1;
                    let (step, next) = Self::parse_bracket(&chars, pos, expr)?;
                    steps.push(step);
                    pos = next;
                }
                other => {
                    return Err(EnrichError::InvalidPath(format!(
                        "unexpected character '{other}' in expression: {expr}"
                    ))
                    .into());
                }
            }
        }

        Ok(Self {
            steps,
            original: expr.to_string(),
        })
    }

    /// Parses one bracketed step starting just after `[`. Returns the step
    /// and the position just after the closing `]`.
    fn parse_bracket(chars: &[char], mut pos: usize, expr: &str) -> Result<(PathStep, usize)> {
        let unclosed =
            || EnrichError::InvalidPath(format!("unclosed bracket in expression: {expr}"));

        if pos >= chars.len() {
            return Err(unclosed().into());
        }

        if chars[pos] == '\'' || chars[pos] == '"' {
            let quote = chars[pos];
            pos += 1;
            let start = pos;
            while pos < chars.len() && chars[pos] != quote {
                pos += 1;
            }
            if pos >= chars.len() {
                return Err(EnrichError::InvalidPath(format!(
                    "unterminated quote in expression: {expr}"
                ))
                .into());
            }
            let key: String = chars[start..pos].iter().collect();
            if key.is_empty() {
                return Err(EnrichError::InvalidPath(format!(
                    "empty member name in expression: {expr}"
                ))
                .into());
            }
            pos += 1;
            if pos >= chars.len() || chars[pos] != ']' {
                return Err(unclosed().into());
            }
            Ok((PathStep::Key(key), pos + 1))
        } else {
            let start = pos;
            while pos < chars.len() && chars[pos] != ']' {
                pos += 1;
            }
            if pos >= chars.len() {
                return Err(unclosed().into());
            }
            let digits: String = chars[start..pos].iter().collect();
            let index = digits.parse::<usize>().map_err(|_| {
                EnrichError::InvalidPath(format!(
                    "invalid array index '{digits}' in expression: {expr}"
                ))
            })?;
            Ok((PathStep::Index(index), pos + 1))
        }
    }

    /// Evaluates the path against a document root.
    ///
    /// Returns `None` if any step fails to resolve (missing member, index
    /// out of bounds, or a step applied to a node of the wrong shape).
    pub fn evaluate<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut node = root;
        for step in &self.steps {
            node = match step {
                PathStep::Key(key) => node.as_object()?.get(key)?,
                PathStep::Index(index) => node.as_array()?.get(*index)?,
            };
        }
        Some(node)
    }

    /// Returns the original expression string.
    pub fn expression(&self) -> &str {
        &self.original
    }

    /// Returns the parsed steps.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }
}
