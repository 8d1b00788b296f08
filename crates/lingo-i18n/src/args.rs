//! Placeholder arguments and substitution
//!
//! Messages may contain `{0}`, `{1}`, ... positional placeholders or `{name}`
//! named placeholders. The [`Args`] variant chosen by the caller selects which
//! kind is substituted.

use std::collections::HashMap;
use std::fmt::Display;

/// Arguments substituted into a message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Args {
    /// No substitution, the message is returned as is
    #[default]
    None,
    /// `{i}` is replaced by the i-th value
    Positional(Vec<String>),
    /// `{name}` is replaced by the value stored under `name`; when several
    /// names match at the same position (`a` and `a}b` in `{a}b}`) the longest
    /// one wins
    Named(HashMap<String, String>),
}

impl Args {
    /// Build positional arguments from any displayable values
    pub fn positional<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        Self::Positional(values.into_iter().map(|value| value.to_string()).collect())
    }

    /// Build named arguments from `(name, value)` pairs; a repeated name keeps
    /// its last value
    pub fn named<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.to_string()))
                .collect(),
        )
    }

    /// Whether no substitution would take place
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Positional(values) => values.is_empty(),
            Self::Named(values) => values.is_empty(),
        }
    }

    /// Match a placeholder at the start of `after_open` (the text following a
    /// `{`), returning the token length and its value
    fn placeholder_at(&self, after_open: &str) -> Option<(usize, &str)> {
        match self {
            Self::None => None,
            Self::Positional(values) => {
                let close = after_open.find('}')?;
                positional_index(&after_open[..close])
                    .and_then(|index| values.get(index))
                    .map(|value| (close, value.as_str()))
            }
            Self::Named(values) => values
                .iter()
                .filter(|(name, _)| {
                    after_open
                        .strip_prefix(name.as_str())
                        .is_some_and(|tail| tail.starts_with('}'))
                })
                .max_by_key(|(name, _)| name.len())
                .map(|(name, value)| (name.len(), value.as_str())),
        }
    }

    /// Substitute every placeholder of `message`.
    ///
    /// Every `{token}` occurrence in the original message whose token has a
    /// value is replaced. Inserted values are never scanned again, so a value
    /// containing `{0}` stays literal.
    pub fn apply(&self, message: &str) -> String {
        if self.is_empty() {
            return message.to_string();
        }

        let mut output = String::with_capacity(message.len());
        let mut rest = message;

        while let Some(open) = rest.find('{') {
            output.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];

            match self.placeholder_at(after_open) {
                Some((close, value)) => {
                    output.push_str(value);
                    rest = &after_open[close + 1..];
                }
                None => {
                    output.push('{');
                    rest = after_open;
                }
            }
        }

        output.push_str(rest);
        output
    }
}

/// Parse a decimal index without sign or leading zeros
fn positional_index(token: &str) -> Option<usize> {
    let valid = !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));

    if valid {
        token.parse().ok()
    } else {
        None
    }
}

impl<T: Display> From<Vec<T>> for Args {
    fn from(values: Vec<T>) -> Self {
        Self::positional(values)
    }
}

impl<V: Display> From<HashMap<String, V>> for Args {
    fn from(values: HashMap<String, V>) -> Self {
        Self::named(values)
    }
}

/// Build positional [`Args`]
///
/// ```
/// use lingo_i18n::args;
///
/// assert_eq!(args!["John", 24].apply("{0} is {1}"), "John is 24");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::None
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::Positional(vec![$(::std::string::ToString::to_string(&$value)),+])
    };
}

/// Build named [`Args`]
///
/// ```
/// use lingo_i18n::named_args;
///
/// let args = named_args!{"name" => "John", "age" => 24};
/// assert_eq!(args.apply("{name} is {age}"), "John is 24");
/// ```
#[macro_export]
macro_rules! named_args {
    () => {
        $crate::Args::None
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut values = ::std::collections::HashMap::new();
        $(
            values.insert(
                ::std::string::ToString::to_string(&$key),
                ::std::string::ToString::to_string(&$value),
            );
        )+
        $crate::Args::Named(values)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_returns_message_unchanged() {
        assert_eq!(Args::None.apply("Hey, {0}"), "Hey, {0}");
        assert_eq!(Args::positional(Vec::<String>::new()).apply("{0}"), "{0}");
    }

    #[test]
    fn test_positional_substitution() {
        assert_eq!(args!["John"].apply("Hey, {0}"), "Hey, John");
        assert_eq!(
            args!["a", 2, true].apply("{2} {1} {0} {1}"),
            "true 2 a 2"
        );
    }

    #[test]
    fn test_positional_ignores_out_of_range_and_leading_zeros() {
        let args = args!["x"];
        assert_eq!(args.apply("{1} {00} {-0} {0}"), "{1} {00} {-0} x");
    }

    #[test]
    fn test_named_substitution() {
        let args = named_args! {"name" => "John", "age" => 24};
        assert_eq!(
            args.apply("I am {name}, {age} years old."),
            "I am John, 24 years old."
        );
    }

    #[test]
    fn test_named_with_overlapping_names() {
        let args = named_args! {"a" => "1", "ab" => "2"};
        assert_eq!(args.apply("{a}{ab}{b}"), "12{b}");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        assert_eq!(args!["{1}", "x"].apply("{0}-{1}"), "{1}-x");

        let args = named_args! {"a" => "{b}", "b" => "B"};
        assert_eq!(args.apply("{a}{b}"), "{b}B");
    }

    #[test]
    fn test_unbalanced_braces() {
        let args = args!["x"];
        assert_eq!(args.apply("{{0}}"), "{x}");
        assert_eq!(args.apply("{0"), "{0");
        assert_eq!(args.apply("}{0}{"), "}x{");
    }

    #[test]
    fn test_named_with_closing_brace_in_name() {
        let args = named_args! {"a}b" => "X"};
        assert_eq!(args.apply("[{a}b}]"), "[X]");

        let args = named_args! {"a" => "short", "a}b" => "long"};
        assert_eq!(args.apply("{a}b} {a}"), "long short");
    }

    #[test]
    fn test_named_repeated_key_keeps_last() {
        let args = Args::named([("n", 1), ("n", 2)]);
        assert_eq!(args.apply("{n}"), "2");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Args::from(vec![1, 2]), args![1, 2]);

        let map = HashMap::from([("k".to_string(), 1.5)]);
        assert_eq!(Args::from(map).apply("{k}"), "1.5");
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        assert_eq!(args!["Bob"].apply("Viszlát, {0}! 👋"), "Viszlát, Bob! 👋");
    }
}
