//! `{* name *}` parameter interpolation.
//!
//! Tokens name a parameter; there is no expression evaluation. Parameter
//! values are converted into the output format before substitution, so an
//! `html` rendering never carries unescaped parameter text.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use super::{Format, escape_html};

static PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\*([^}]+?)\*\}").unwrap());

/// Replace `{* name *}` tokens in `template` with the matching parameter.
///
/// Unknown names leave the token untouched.
///
/// ```
/// use locus::core::{Format, interpolate};
///
/// let text = interpolate("{* count *} items in {*list*}", &[("count", "3")], Format::Text);
/// assert_eq!(text, "3 items in {*list*}");
/// ```
pub fn interpolate<'t>(template: &'t str, params: &[(&str, &str)], format: Format) -> Cow<'t, str> {
    if params.is_empty() || !template.contains("{*") {
        return Cow::Borrowed(template);
    }

    PARAM_REGEX.replace_all(template, |caps: &Captures<'_>| {
        let name = caps[1].trim();
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) => match format {
                Format::Text => (*value).to_string(),
                Format::Html => escape_html(value).into_owned(),
            },
            None => caps[0].to_string(),
        }
    })
}
