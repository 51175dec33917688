//! Naming template substitution.
//!
//! Templates may contain positional placeholders (`{0}`, `{1}`, ...) filled
//! from the step arguments and field placeholders (`#name`) filled from the
//! displayed fields. The template is scanned once from left to right, so text
//! produced by a substitution is never itself substituted.

use std::collections::HashMap;

use crate::{
    config::{FieldPolicy, NamingConfig},
    description::FieldValue,
    error::{Result, StepError},
};

/// Fill the placeholders of `template`.
///
/// # Errors
///
/// Returns [`StepError::MissingArgument`] if a positional placeholder has no
/// matching argument, and [`StepError::UndefinedField`] or
/// [`StepError::MissingField`] when a field placeholder cannot be filled and
/// the corresponding [`FieldPolicy`] is [`FieldPolicy::Fail`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use annotated_steps::{FieldValue, NamingConfig, template::render};
///
/// let fields = HashMap::from([("color".to_owned(), FieldValue::from("red"))]);
/// let name = render(
///     "{0} likes #color",
///     &["Joe".to_owned()],
///     &fields,
///     &NamingConfig::DEFAULT,
/// )
/// .unwrap();
/// assert_eq!(name, "Joe likes red");
/// ```
pub fn render(
    template: &str,
    arguments: &[String],
    fields: &HashMap<String, FieldValue>,
    config: &NamingConfig,
) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '#']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        rest = if tail.starts_with('{') {
            match positional(tail) {
                Some((index, consumed)) => {
                    let argument = arguments.get(index).ok_or(StepError::MissingArgument {
                        index,
                        available: arguments.len(),
                    })?;
                    out.push_str(argument);
                    &tail[consumed..]
                }
                None => {
                    out.push('{');
                    &tail[1..]
                }
            }
        } else {
            let name_len = tail[1..]
                .find(|c: char| !is_field_char(c))
                .unwrap_or(tail.len() - 1);
            if name_len == 0 {
                out.push('#');
            } else {
                out.push_str(&field(&tail[1..=name_len], fields, config)?);
            }
            &tail[1 + name_len..]
        };
    }
    out.push_str(rest);
    Ok(out)
}

/// Parse `{digits}` at the start of `text`, returning the index and the
/// number of bytes consumed.
fn positional(text: &str) -> Option<(usize, usize)> {
    let close = text.find('}')?;
    let digits = &text[1..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(|index| (index, close + 1))
}

fn is_field_char(c: char) -> bool { c.is_ascii_alphanumeric() || c == '_' }

fn field(name: &str, fields: &HashMap<String, FieldValue>, config: &NamingConfig) -> Result<String> {
    match fields.get(name) {
        Some(FieldValue::Value(value)) => Ok(value.clone()),
        Some(FieldValue::Undefined) => match config.undefined_fields() {
            FieldPolicy::Fail => Err(StepError::UndefinedField {
                field: name.to_owned(),
            }),
            FieldPolicy::Passthrough => Ok(format!("#{name}")),
        },
        None => match config.missing_fields() {
            FieldPolicy::Fail => Err(StepError::MissingField {
                field: name.to_owned(),
            }),
            FieldPolicy::Passthrough => {
                log::warn!("no value supplied for field `#{name}`; leaving placeholder in step name");
                Ok(format!("#{name}"))
            }
        },
    }
}
