//! Named render rules for configured columns.
//!
//! A config file cannot carry closures, so columns name one of a few
//! built-in rules which are turned into a [`RenderFn`] at load time.

use crate::model::{RenderFn, RenderedCell, Value};
use std::sync::Arc;

/// Largest accepted `fixed:N` precision.
pub const MAX_FIXED_DECIMALS: usize = 100;

/// A built-in cell render rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRule {
    /// Upper-case the displayed text. Nulls stay empty.
    Uppercase,
    /// Lower-case the displayed text. Nulls stay empty.
    Lowercase,
    /// Format numbers with a fixed number of decimals.
    Fixed(usize),
    /// Show the given text in place of null values.
    Placeholder(String),
}

impl RenderRule {
    /// Parse a rule name such as `"fixed:2"` or `"placeholder:n/a"`.
    ///
    /// Returns `None` for unknown names and malformed arguments, including a
    /// `fixed` precision above [`MAX_FIXED_DECIMALS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tabview::config::RenderRule;
    ///
    /// assert_eq!(RenderRule::parse("fixed:2"), Some(RenderRule::Fixed(2)));
    /// assert_eq!(RenderRule::parse("bold"), None);
    /// ```
    pub fn parse(rule: &str) -> Option<Self> {
        let (name, arg) = match rule.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (rule.trim(), None),
        };

        match (name, arg) {
            ("uppercase", None) => Some(RenderRule::Uppercase),
            ("lowercase", None) => Some(RenderRule::Lowercase),
            ("fixed", Some(digits)) => digits
                .trim()
                .parse()
                .ok()
                .filter(|&decimals| decimals <= MAX_FIXED_DECIMALS)
                .map(RenderRule::Fixed),
            ("placeholder", Some(text)) => Some(RenderRule::Placeholder(text.to_string())),
            _ => None,
        }
    }

    /// Apply the rule to one raw value.
    pub fn apply(&self, value: &Value) -> RenderedCell {
        match (self, value) {
            (_, Value::Null) => match self {
                RenderRule::Placeholder(text) => RenderedCell::text(text.clone()),
                _ => RenderedCell::Value(Value::Null),
            },
            (RenderRule::Uppercase, v) => RenderedCell::text(v.to_string().to_uppercase()),
            (RenderRule::Lowercase, v) => RenderedCell::text(v.to_string().to_lowercase()),
            (RenderRule::Fixed(decimals), Value::Number(n)) if n.is_finite() => {
                RenderedCell::text(format!("{n:.prec$}", prec = *decimals))
            }
            (_, v) => RenderedCell::Value(v.clone()),
        }
    }

    /// Shareable render function for a column descriptor.
    pub fn into_render_fn(self) -> RenderFn {
        Arc::new(move |value, _record| self.apply(value))
    }
}
