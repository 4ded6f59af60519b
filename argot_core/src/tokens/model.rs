use thiserror::Error;

use crate::context::ErrorContext;
use crate::substring::Substring;

/// Errors from [`tokenize`](crate::tokenize).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    /// A quote was opened but never closed.
    /// The offset is that of the opening quote.
    #[error("Syntax error: unterminated quotes (offset={0}).")]
    UnterminatedQuotes(usize),

    /// A closing quote was directly followed by more token content.
    /// The offset is that of the closing quote.
    #[error("Syntax error: terminating quotes not at end of token (offset={0}).")]
    QuotesNotAtEndOfToken(usize),
}

impl TokenizeError {
    /// The byte offset of the offending quote character.
    pub fn offset(&self) -> usize {
        match self {
            TokenizeError::UnterminatedQuotes(offset)
            | TokenizeError::QuotesNotAtEndOfToken(offset) => *offset,
        }
    }

    /// Point at the offending quote in the `line` which was tokenized.
    pub fn context(&self, line: &str) -> ErrorContext {
        ErrorContext::new(line, self.offset())
    }
}

/// A lexical unit extracted from a line.
///
/// The `contents` exclude any quote which starts or ends the token, while the outer offsets include them.
/// Quotes in the middle of a token (ex: `--name="a b"`) are part of the contents.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::{tokenize, TokenizerOptions};
///
/// let line = r#"open "my file" --force"#;
/// let tokens = tokenize(line, TokenizerOptions::default())
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// assert_eq!(tokens[1].as_str(), "my file");
/// assert!(tokens[1].starts_with_quote() && tokens[1].ends_with_quote());
/// assert_eq!(&line[tokens[1].outer_starting_offset()..tokens[1].outer_ending_offset()], "\"my file\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'s> {
    contents: Substring<'s>,
    starts_with_quote: bool,
    ends_with_quote: bool,
}

impl<'s> Token<'s> {
    pub(crate) fn new(contents: Substring<'s>, starts_with_quote: bool, ends_with_quote: bool) -> Self {
        Self {
            contents,
            starts_with_quote,
            ends_with_quote,
        }
    }

    /// The unquoted interior of the token.
    pub fn contents(&self) -> &Substring<'s> {
        &self.contents
    }

    /// The unquoted interior of the token, as a string.
    pub fn as_str(&self) -> &'s str {
        self.contents.as_str()
    }

    /// Whether the token was opened by a quote.
    pub fn starts_with_quote(&self) -> bool {
        self.starts_with_quote
    }

    /// Whether the token was closed by a quote.
    pub fn ends_with_quote(&self) -> bool {
        self.ends_with_quote
    }

    /// The byte offset where the token starts in the line, including an opening quote.
    pub fn outer_starting_offset(&self) -> usize {
        self.contents.starting_offset() - usize::from(self.starts_with_quote)
    }

    /// The byte offset just past the token in the line, including a closing quote.
    pub fn outer_ending_offset(&self) -> usize {
        self.contents.ending_offset() + usize::from(self.ends_with_quote)
    }

    /// The full token as written in the line, including quotes.
    pub fn outer(&self) -> Substring<'s> {
        let start = self.outer_starting_offset();
        Substring::unchecked(
            self.contents.base(),
            start,
            self.outer_ending_offset() - start,
        )
    }
}

impl<'s> std::fmt::Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.contents)
    }
}
