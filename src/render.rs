//! Template renderer
//!
//! A ready-made renderer for callers that do not want to write a closure.
//!
//! ## Template Syntax
//! - `{event}`: the event, formatted with `Display`
//! - `{description}`: the description, verbatim
//! - `{{` / `}}`: literal braces
//!
//! Any other placeholder is rejected when the template is parsed.

use std::fmt;
use std::str::FromStr;

use crate::error::{EventLogError, Result};

/// Template used when none is given
pub const DEFAULT_TEMPLATE: &str = "{event}: {description}";

/// A parsed piece of a template
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Event,
    Description,
}

/// A parsed `{event}`/`{description}` template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template string
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
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
                                return Err(EventLogError::Config(format!(
                                    "unclosed placeholder '{{{}' in template '{}'",
                                    name, source
                                )))
                            }
                        }
                    }

                    let segment = match name.as_str() {
                        "event" => Segment::Event,
                        "description" => Segment::Description,
                        other => {
                            return Err(EventLogError::Config(format!(
                                "unknown placeholder '{{{}}}' in template '{}'",
                                other, source
                            )))
                        }
                    };

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' => {
                    return Err(EventLogError::Config(format!(
                        "unmatched '}}' in template '{}'",
                        source
                    )))
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template string this was parsed from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Format one (event, description) pair
    pub fn render<T: fmt::Display + ?Sized>(&self, event: &T, description: &str) -> String {
        let mut rendered = String::with_capacity(self.source.len() + description.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Event => rendered.push_str(&event.to_string()),
                Segment::Description => rendered.push_str(description),
            }
        }

        rendered
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Event,
                Segment::Literal(": ".to_string()),
                Segment::Description,
            ],
        }
    }
}

impl FromStr for Template {
    type Err = EventLogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
