//! Template rendering for the bundled packaging templates.
//!
//! Templates are Jinja-style and rendered with Tera against a [`Context`]:
//! `{{ name }}`, filters such as `{{ name | lower }}`, `{# comments #}` and
//! `{% if %}` blocks all work. Single braces are ordinary text, so
//! `${misc:Depends}` passes through untouched.
//!
//! # Trailing newline
//!
//! One trailing newline of the template source is dropped from the output,
//! matching Jinja's default `keep_trailing_newline = False`. Callers that need
//! the file to end with a newline append it themselves.
//!
//! # Error Handling
//!
//! Undefined variables are an error rather than an empty substitution, so a
//! typo in a template cannot silently produce a broken control file.

use crate::context::Context;
use std::error::Error as _;
use tera::Tera;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template source does not parse.
    #[error("invalid template: {0}")]
    Parse(String),
    /// Rendering failed, e.g. an undefined variable or an unknown filter.
    #[error("{0}")]
    Render(String),
    /// The context could not be converted for the renderer.
    #[error("failed to serialize template context: {0}")]
    Context(String),
}

/// Render `source` (registered as `name`) against `context`.
///
/// # Examples
///
/// ```ignore
/// let ctx = Context::from_pairs([("name", "MyPkg"), ("version", "1.0")]);
/// let out = render_template("control.j2", "{{ name | lower }} ({{ version }})\n", &ctx)?;
/// assert_eq!(out, "mypkg (1.0)");
/// ```
pub fn render_template(name: &str, source: &str, context: &Context) -> Result<String, TemplateError> {
    let source = source.strip_suffix('\n').unwrap_or(source);

    let mut tera = Tera::default();
    // Packaging files are plain text; never HTML-escape values.
    tera.autoescape_on(vec![]);
    tera.add_raw_template(name, source)
        .map_err(|e| TemplateError::Parse(describe(&e)))?;

    let ctx = tera::Context::from_serialize(context)
        .map_err(|e| TemplateError::Context(describe(&e)))?;

    tera.render(name, &ctx)
        .map_err(|e| TemplateError::Render(describe(&e)))
}

/// Tera reports the useful detail in the source chain; flatten it into one line.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> Context {
        Context::from_pairs(pairs.iter().copied())
    }

    fn render(source: &str, context: &Context) -> Result<String, TemplateError> {
        render_template("test.j2", source, context)
    }

    #[test]
    fn test_simple_substitution() {
        let ctx = ctx(&[("name", "mypkg"), ("version", "1.2.3")]);
        let result = render("{{ name }} ({{ version }})", &ctx).unwrap();
        assert_eq!(result, "mypkg (1.2.3)");
    }

    #[test]
    fn test_whitespace_is_optional() {
        let ctx = ctx(&[("name", "mypkg")]);
        assert_eq!(render("{{name}}", &ctx).unwrap(), "mypkg");
    }

    #[test]
    fn test_no_placeholders() {
        let result = render("Priority: extra", &Context::default()).unwrap();
        assert_eq!(result, "Priority: extra");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(render("", &Context::default()).unwrap(), "");
    }

    #[test]
    fn test_single_braces_pass_through() {
        let result =
            render("Depends: ${python:Depends}, ${misc:Depends}", &Context::default()).unwrap();
        assert_eq!(result, "Depends: ${python:Depends}, ${misc:Depends}");
    }

    #[test]
    fn test_drops_one_trailing_newline() {
        let ctx = ctx(&[("compat", "9")]);
        assert_eq!(render("{{ compat }}\n", &ctx).unwrap(), "9");
        assert_eq!(render("{{ compat }}\n\n", &ctx).unwrap(), "9\n");
    }

    #[test]
    fn test_multiline_template() {
        let ctx = ctx(&[("name", "mypkg"), ("description", "Does a thing")]);
        let template = "Package: {{ name }}\nDescription: {{ description }}\n";
        let result = render(template, &ctx).unwrap();
        assert_eq!(result, "Package: mypkg\nDescription: Does a thing");
    }

    #[test]
    fn test_filters_are_applied() {
        let ctx = ctx(&[("name", "MyPkg")]);
        assert_eq!(render("{{ name | lower }}", &ctx).unwrap(), "mypkg");
    }

    #[test]
    fn test_comments_are_stripped() {
        let ctx = ctx(&[("name", "MyPkg")]);
        assert_eq!(render("{# package name #}{{ name }}", &ctx).unwrap(), "MyPkg");
    }

    #[test]
    fn test_conditionals_are_evaluated() {
        let ctx = ctx(&[("name", "MyPkg")]);
        assert_eq!(render("{% if name %}x{% endif %}", &ctx).unwrap(), "x");
        assert_eq!(
            render("{% if missing is defined %}x{% else %}y{% endif %}", &ctx).unwrap(),
            "y"
        );
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let ctx = ctx(&[("maintainer", "Alice & Bob <ab@example.com>")]);
        let result = render_template("control.html", "{{ maintainer }}", &ctx).unwrap();
        assert_eq!(result, "Alice & Bob <ab@example.com>");
    }

    #[test]
    fn test_braces_in_value_are_not_rendered_again() {
        let ctx = ctx(&[("description", "uses {{ name }} literally")]);
        let result = render("{{ description }}", &ctx).unwrap();
        assert_eq!(result, "uses {{ name }} literally");
    }

    #[test]
    fn test_undefined_variable_error() {
        let err = render("Source: {{ name }}", &Context::default()).unwrap_err();
        match &err {
            TemplateError::Render(message) => assert!(message.contains("`name`"), "{}", message),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_placeholder_error() {
        let err = render("Source: {{ name", &Context::default()).unwrap_err();
        assert!(matches!(err, TemplateError::Parse(_)), "{:?}", err);
    }

    #[test]
    fn test_unicode_values() {
        let ctx = ctx(&[("maintainer", "Zoë Ærø")]);
        let result = render("Maintainer: {{ maintainer }}", &ctx).unwrap();
        assert_eq!(result, "Maintainer: Zoë Ærø");
    }
}
