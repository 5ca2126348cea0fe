//! Compiled `{variable}` templates.
//!
//! Page templates are parsed once at startup into literal and variable
//! segments; rendering only concatenates.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name` (surrounding whitespace is trimmed)
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Values are inserted verbatim. Callers escape them for the output context.

use std::collections::HashMap;
use std::fmt;

/// Error type for template compilation and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// The position in the template where the variable was found.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace { position: usize },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName { position: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable { name: String, position: usize },
}

/// A template parsed into segments, ready to render any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source` into a template.
    ///
    /// Syntax errors are reported here, never at render time.
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => {
                    if let Some((_, '{')) = chars.peek() {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut var_name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => var_name.push(c),
                            None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                        }
                    }

                    let var_name = var_name.trim();
                    if var_name.is_empty() {
                        return Err(TemplateError::EmptyVariableName { position: pos });
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Variable {
                        name: var_name.to_string(),
                        position: pos,
                    });
                }
                '}' => {
                    // `}}` collapses to one brace; a lone `}` is literal.
                    if let Some((_, '}')) = chars.peek() {
                        chars.next();
                    }
                    literal.push('}');
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Render with `variables`; every referenced variable must be present.
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String, TemplateError> {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Variable { name, position } => match variables.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedVariable {
                            name: name.clone(),
                            position: *position,
                        });
                    }
                },
            }
        }

        Ok(result)
    }
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, variables: &HashMap<String, String>) -> Result<String, TemplateError> {
        Template::compile(source)?.render(variables)
    }

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("name", "a.jpg"), ("count", "3")]);
        let result = render("{count} pictures, first {name}", &vars).unwrap();
        assert_eq!(result, "3 pictures, first a.jpg");
    }

    #[test]
    fn test_no_variables() {
        let result = render("<p>plain</p>", &HashMap::new()).unwrap();
        assert_eq!(result, "<p>plain</p>");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(render("", &HashMap::new()).unwrap(), "");
    }

    #[test]
    fn test_escape_braces() {
        let result = render("Use {{var}} for variables", &HashMap::new()).unwrap();
        assert_eq!(result, "Use {var} for variables");
    }

    #[test]
    fn test_lone_closing_brace() {
        assert_eq!(render("a } b", &HashMap::new()).unwrap(), "a } b");
    }

    #[test]
    fn test_compiled_template_renders_repeatedly() {
        let template = Template::compile("<li>{name}</li>").unwrap();

        let first = template.render(&vars([("name", "a.jpg")])).unwrap();
        let second = template.render(&vars([("name", "b.jpg")])).unwrap();

        assert_eq!(first, "<li>a.jpg</li>");
        assert_eq!(second, "<li>b.jpg</li>");
    }

    #[test]
    fn test_undefined_variable_error_at_render() {
        let template = Template::compile("Hello {name}").unwrap();

        let err = template.render(&HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedVariable {
                name: "name".to_string(),
                position: 6,
            }
        );
    }

    #[test]
    fn test_unmatched_brace_error_at_compile() {
        let err = Template::compile("Hello {name").unwrap_err();
        assert_eq!(err, TemplateError::UnmatchedBrace { position: 6 });
    }

    #[test]
    fn test_empty_variable_name_error_at_compile() {
        let err = Template::compile("Hello { }").unwrap_err();
        assert_eq!(err, TemplateError::EmptyVariableName { position: 6 });
    }

    #[test]
    fn test_whitespace_in_variable_name() {
        let result = render("Hello { name }!", &vars([("name", "Alice")])).unwrap();
        assert_eq!(result, "Hello Alice!");
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let result = render("{a}", &vars([("a", "{b} }} {{")])).unwrap();
        assert_eq!(result, "{b} }} {{");
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UnmatchedBrace { position: 5 };
        assert_eq!(err.to_string(), "unmatched '{' at position 5 in template");

        let err = TemplateError::EmptyVariableName { position: 3 };
        assert_eq!(
            err.to_string(),
            "empty variable name '{}' at position 3 in template"
        );
    }
}
