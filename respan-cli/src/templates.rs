//! Replacement templates
//!
//! A template is plain text with `{name}` placeholders. `{{` and `}}` stand
//! for literal braces.

use crate::error::CliError;

/// Placeholder names a template may use
pub const PLACEHOLDERS: &[&str] = &[
    "text",
    "screen_name",
    "list_slug",
    "hashtag",
    "url",
    "emoji",
    "codepoints",
    "category",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Placeholder(&'static str),
}

/// A parsed replacement template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse a template, rejecting unknown placeholders and stray braces
    pub fn parse(source: &str) -> Result<Self, CliError> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => name.push(ch),
                            None => {
                                return Err(CliError::TemplateError(format!(
                                    "unclosed placeholder in {source:?}"
                                )))
                            }
                        }
                    }
                    let Some(known) = PLACEHOLDERS.iter().find(|p| **p == name) else {
                        return Err(CliError::TemplateError(format!(
                            "unknown placeholder {{{name}}}"
                        )));
                    };
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Placeholder(*known));
                }
                '}' => {
                    return Err(CliError::TemplateError(format!(
                        "unmatched '}}' in {source:?}"
                    )))
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self { pieces })
    }

    /// Render with the given values; placeholders without a value render empty
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Placeholder(name) => {
                    if let Some((_, value)) = values.iter().find(|(k, _)| k == name) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }
}

/// Format codepoints as `U+XXXX` separated by spaces
pub fn codepoint_list(s: &str) -> String {
    s.chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}
