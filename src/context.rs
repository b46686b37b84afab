//! Template context for the packaging templates.
//!
//! A [`Context`] maps keys such as `name` or `latest_git_commit` to the
//! values substituted into the templates. Keys are kept sorted so printed
//! and serialized contexts are stable across runs.

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Built-in defaults, merged before anything else.
pub const DEFAULT_CONTEXT: &[(&str, &str)] = &[("compat", "9")];

/// Key holding the construction timestamp.
pub const DATE_KEY: &str = "date";

/// A single context value.
///
/// Serializes as its display string, so templates and `--json` output see
/// dates in the same RFC 2822 form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    Text(String),
    /// Rendered in RFC 2822 form, as Debian changelog trailers expect.
    Date(DateTime<Local>),
}

impl ContextValue {
    /// Returns the text if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ContextValue::Text(s) => Some(s),
            ContextValue::Date(_) => None,
        }
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Text(s) => f.write_str(s),
            ContextValue::Date(d) => f.write_str(&d.to_rfc2822()),
        }
    }
}

impl Serialize for ContextValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        ContextValue::Text(s.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        ContextValue::Text(s)
    }
}

/// Key-value mapping used to fill in template placeholders.
///
/// Only this crate can add entries; once handed out, a context is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<String, ContextValue>,
}

impl Context {
    /// Context seeded with [`DEFAULT_CONTEXT`] and `date` set to `now`.
    pub(crate) fn with_defaults(now: DateTime<Local>) -> Self {
        let mut ctx = Self::from_pairs(DEFAULT_CONTEXT.iter().copied());
        ctx.insert(DATE_KEY, ContextValue::Date(now));
        ctx
    }

    pub(crate) fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ContextValue>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Merge `other` into this context; keys in `other` win.
    pub(crate) fn extend(&mut self, other: Context) {
        self.values.extend(other.values);
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// Text value for `key`, `None` if absent or a date.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ContextValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
