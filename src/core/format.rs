//! Output formats and stored-value conversion.
//!
//! Stored values may carry their own authoring tag: `html:<b>Hi</b>` is
//! already markup, `text:a < b` is plain text. Untagged values are plain text.

use std::{borrow::Cow, fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

const HTML_TAG: &str = "html:";
const TEXT_TAG: &str = "text:";

/// Output rendering mode for resolved values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Verbatim text.
    #[default]
    Text,
    /// Markup, with plain text escaped.
    Html,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Html => write!(f, "html"),
        }
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "html" => Ok(Format::Html),
            other => bail!("Unknown format \"{}\" (expected \"text\" or \"html\")", other),
        }
    }
}

/// Convert a stored value into `format`.
///
/// Borrows when no change is needed.
pub fn convert(format: Format, raw: &str) -> Cow<'_, str> {
    match format {
        Format::Text => {
            let payload = raw
                .strip_prefix(HTML_TAG)
                .or_else(|| raw.strip_prefix(TEXT_TAG))
                .unwrap_or(raw);
            Cow::Borrowed(payload)
        }
        Format::Html => match raw.strip_prefix(HTML_TAG) {
            Some(markup) => Cow::Borrowed(markup),
            None => escape_html(raw.strip_prefix(TEXT_TAG).unwrap_or(raw)),
        },
    }
}

/// Escape `< > & " '` as HTML entities.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
