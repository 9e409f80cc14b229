use std::{borrow::Cow, fmt};

/// A message key together with its miss policy.
///
/// A lenient key stands for base-locale text: when no translation exists the
/// key itself is rendered. A strict key names an entry that must exist, and a
/// miss is an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageKey<'a> {
    Lenient(Cow<'a, str>),
    Strict(Cow<'a, str>),
}

impl<'a> MessageKey<'a> {
    pub fn lenient(key: impl Into<Cow<'a, str>>) -> Self {
        MessageKey::Lenient(key.into())
    }

    pub fn strict(key: impl Into<Cow<'a, str>>) -> Self {
        MessageKey::Strict(key.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            MessageKey::Lenient(key) | MessageKey::Strict(key) => key,
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, MessageKey::Strict(_))
    }
}

impl fmt::Display for MessageKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
