// File: form-builder/src/render.rs
// Purpose: Render extracted fields through a per-field template

use crate::error::{FormError, Result};
use crate::extract::Extractor;
use crate::field::Field;
use crate::introspect::FormValue;
use anyhow::bail;
use maud::{html, Markup, PreEscaped};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// An error message attached to a field by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten validation output keyed by field name
///
/// Fields are sorted by name so repeated renders agree; messages keep their
/// order within a field.
pub fn field_errors_from_map(errors: &HashMap<String, Vec<String>>) -> Vec<FieldError> {
    let mut names: Vec<&String> = errors.keys().collect();
    names.sort();

    names
        .into_iter()
        .flat_map(|name| {
            errors[name]
                .iter()
                .map(move |message| FieldError::new(name.as_str(), message.as_str()))
        })
        .collect()
}

/// Renders one field
pub trait Template {
    fn render_field(&self, field: &Field) -> anyhow::Result<Markup>;
}

impl<F> Template for F
where
    F: Fn(&Field) -> anyhow::Result<Markup>,
{
    fn render_field(&self, field: &Field) -> anyhow::Result<Markup> {
        self(field)
    }
}

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex is valid"));

/// String template with `{placeholder}` substitution
///
/// Supported placeholders: `{label}`, `{name}`, `{type}`, `{placeholder}`,
/// `{value}`, `{errors}` (messages joined by `, `) and `{value_attr}`, which
/// expands to `value="..."` only when the value is non-zero. Substituted
/// text is HTML-escaped. Any other placeholder fails the render.
///
/// ```
/// use form_builder::{FieldTemplate, Form};
///
/// #[derive(Form)]
/// struct Signup {
///     pub email: String,
/// }
///
/// let tpl = FieldTemplate::new(r#"<input type="{type}" name="{name}" {value_attr}>"#);
/// let html = form_builder::render(&tpl, &Signup { email: "a@b.c".into() }, &[]).unwrap();
/// assert_eq!(html.into_string(), r#"<input type="text" name="email" value="a@b.c">"#);
/// ```
#[derive(Debug, Clone)]
pub struct FieldTemplate {
    source: String,
}

impl FieldTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn lookup(field: &Field, placeholder: &str) -> Option<String> {
        let text = match placeholder {
            "label" => escape(&field.label),
            "name" => escape(&field.name),
            "type" => escape(&field.field_type),
            "placeholder" => escape(&field.placeholder),
            "value" => escape(&field.value.to_string()),
            "errors" => escape(&field.errors.join(", ")),
            "value_attr" if field.value.is_zero() => String::new(),
            "value_attr" => format!(r#"value="{}""#, escape(&field.value.to_string())),
            _ => return None,
        };
        Some(text)
    }
}

impl Template for FieldTemplate {
    fn render_field(&self, field: &Field) -> anyhow::Result<Markup> {
        if let Some(unknown) = PLACEHOLDER_REGEX
            .captures_iter(&self.source)
            .map(|caps| caps[1].to_string())
            .find(|name| Self::lookup(field, name).is_none())
        {
            bail!("unknown template placeholder `{{{}}}`", unknown);
        }

        let rendered = PLACEHOLDER_REGEX.replace_all(&self.source, |caps: &regex::Captures| {
            Self::lookup(field, &caps[1]).unwrap_or_default()
        });
        Ok(PreEscaped(rendered.into_owned()))
    }
}

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Attach each error to every field whose name matches, keeping error order
pub fn attach_errors(fields: &mut [Field], errors: &[FieldError]) {
    for field in fields.iter_mut() {
        field.errors = errors
            .iter()
            .filter(|error| error.field == field.name)
            .map(|error| error.message.clone())
            .collect();
    }
}

/// Render `record` with the default extractor
pub fn render<Tpl, T>(template: &Tpl, record: &T, errors: &[FieldError]) -> Result<Markup>
where
    Tpl: Template + ?Sized,
    T: FormValue + ?Sized,
{
    Extractor::default().render(template, record, errors)
}

impl Extractor {
    /// Extract `record`, attach `errors`, and render the template once per field
    ///
    /// Output is the concatenation in field order. The first failing field
    /// aborts the call and nothing is returned.
    pub fn render<Tpl, T>(&self, template: &Tpl, record: &T, errors: &[FieldError]) -> Result<Markup>
    where
        Tpl: Template + ?Sized,
        T: FormValue + ?Sized,
    {
        let mut fields = self.fields(record)?;
        attach_errors(&mut fields, errors);

        let mut html = String::new();
        for field in &fields {
            let markup = template
                .render_field(field)
                .map_err(|source| FormError::Render {
                    field: field.name.clone(),
                    source,
                })?;
            html.push_str(&markup.into_string());
        }

        tracing::debug!(fields = fields.len(), errors = errors.len(), "rendered form");
        Ok(PreEscaped(html))
    }
}
