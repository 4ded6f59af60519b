use std::borrow::Cow;

use crate::model::TokenizerOptions;

/// Quote `value` so that tokenizing the result with `options` yields exactly `value` back as a single token.
///
/// Values which already tokenize to themselves are returned untouched.
/// Otherwise the value is wrapped in the first enabled quote (double before single) which it does not contain.
/// Returns `None` when no enabled quote can represent the value.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::{quote_if_needed, TokenizerOptions};
///
/// let options = TokenizerOptions::default().handle_single_quote(true);
/// assert_eq!(quote_if_needed("plain", options).unwrap(), "plain");
/// assert_eq!(quote_if_needed("two words", options).unwrap(), "\"two words\"");
/// assert_eq!(quote_if_needed("say \"hi\"", options).unwrap(), "'say \"hi\"'");
/// assert_eq!(quote_if_needed("it's \"x\"", options), None);
/// ```
pub fn quote_if_needed(value: &str, options: TokenizerOptions) -> Option<Cow<'_, str>> {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || options.is_quote_delimiter(c));

    if !needs_quotes {
        return Some(Cow::Borrowed(value));
    }

    options
        .quote_delimiters()
        .find(|quote| !value.contains(*quote))
        .map(|quote| Cow::Owned(format!("{quote}{value}{quote}")))
}
