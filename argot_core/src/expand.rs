use thiserror::Error;

use crate::constant::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use crate::context::ErrorContext;
use crate::expression::{parse, Environment, EvaluateError, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Errors from [`expand`].
/// Each carries the byte offset of the opening `{` of the offending placeholder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// A `{` without a following `}`.
    #[error("Unterminated placeholder (offset={0}).")]
    UnterminatedPlaceholder(usize),

    /// A `{}` placeholder.
    #[error("Empty placeholder (offset={0}).")]
    EmptyPlaceholder(usize),

    /// The placeholder body is not a valid expression.
    #[error("Invalid placeholder (offset={offset}): {source}")]
    Parse {
        /// The offset of the placeholder.
        offset: usize,
        /// The reason the body did not parse.
        #[source]
        source: ParseError,
    },

    /// The placeholder expression failed to evaluate.
    #[error("Placeholder cannot be evaluated (offset={offset}): {source}")]
    Evaluate {
        /// The offset of the placeholder.
        offset: usize,
        /// The reason evaluation failed.
        #[source]
        source: EvaluateError,
    },
}

impl ExpandError {
    /// The byte offset of the opening `{` of the offending placeholder.
    pub fn offset(&self) -> usize {
        match self {
            ExpandError::UnterminatedPlaceholder(offset)
            | ExpandError::EmptyPlaceholder(offset)
            | ExpandError::Parse { offset, .. }
            | ExpandError::Evaluate { offset, .. } => *offset,
        }
    }

    /// Point at the offending placeholder in the `template` which was expanded.
    pub fn context(&self, template: &str) -> ErrorContext {
        ErrorContext::new(template, self.offset())
    }
}

/// Expand every `{..}` placeholder in `template` by evaluating its body against `environment`.
///
/// Text outside of placeholders is copied verbatim.
/// A placeholder closes at the first `}` after its `{`; braces are not nested.
/// Expansion is all or nothing: any failing placeholder fails the whole template.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use std::collections::HashMap;
/// use argot::{expand, ExpandError, NoVariables};
///
/// let environment = HashMap::from([("name".to_string(), "world".to_string())]);
/// assert_eq!(expand(&environment, "hello {$name}").unwrap(), "hello world");
/// assert_eq!(
///     expand(&NoVariables, r#"{if $x then "yes" else "no"}"#).unwrap(),
///     "no"
/// );
/// assert_eq!(
///     expand(&NoVariables, "unterminated {"),
///     Err(ExpandError::UnterminatedPlaceholder(13))
/// );
/// ```
pub fn expand(environment: &dyn Environment, template: &str) -> Result<String, ExpandError> {
    let mut expanded = String::with_capacity(template.len());
    let mut position = 0;

    while let Some(relative) = template[position..].find(PLACEHOLDER_OPEN) {
        let open = position + relative;
        let body_start = open + PLACEHOLDER_OPEN.len_utf8();
        let close = template[body_start..]
            .find(PLACEHOLDER_CLOSE)
            .map(|relative| body_start + relative)
            .ok_or(ExpandError::UnterminatedPlaceholder(open))?;

        if close == body_start {
            return Err(ExpandError::EmptyPlaceholder(open));
        }

        let body = &template[body_start..close];
        let expression = parse(body).map_err(|source| ExpandError::Parse {
            offset: open,
            source,
        })?;
        let value = expression
            .evaluate(environment)
            .map_err(|source| ExpandError::Evaluate {
                offset: open,
                source,
            })?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Placeholder at offset {open} ('{body}') expanded to '{value}'.");
        }

        expanded.push_str(&template[position..open]);
        expanded.push_str(&value);
        position = close + PLACEHOLDER_CLOSE.len_utf8();
    }

    expanded.push_str(&template[position..]);
    Ok(expanded)
}
