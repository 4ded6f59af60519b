use crate::constant::{DOUBLE_QUOTE, SINGLE_QUOTE};

/// Configures how [`tokenize`](crate::tokenize) splits a line.
///
/// The default handles the double quote `"` as a token delimiter, which is the common command line convention.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::TokenizerOptions;
///
/// let options = TokenizerOptions::default()
///     .handle_single_quote(true)
///     .allow_partial_input(true);
///
/// assert!(options.handles_double_quote());
/// assert!(options.handles_single_quote());
/// assert!(options.is_partial_input_allowed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenizerOptions {
    allow_partial_input: bool,
    double_quote: bool,
    single_quote: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self::none().handle_double_quote(true)
    }
}

impl TokenizerOptions {
    /// Options under which quote characters are ordinary content and tokens split only on whitespace.
    pub fn none() -> Self {
        Self {
            allow_partial_input: false,
            double_quote: false,
            single_quote: false,
        }
    }

    /// Accept in-progress input: unterminated quotes, and quotes closing in the middle of a token, are tolerated.
    pub fn allow_partial_input(mut self, allow: bool) -> Self {
        self.allow_partial_input = allow;
        self
    }

    /// Treat `"` as a token delimiter.
    pub fn handle_double_quote(mut self, handle: bool) -> Self {
        self.double_quote = handle;
        self
    }

    /// Treat `'` as a token delimiter.
    pub fn handle_single_quote(mut self, handle: bool) -> Self {
        self.single_quote = handle;
        self
    }

    /// Whether in-progress input is accepted.
    pub fn is_partial_input_allowed(&self) -> bool {
        self.allow_partial_input
    }

    /// Whether `"` is a token delimiter.
    pub fn handles_double_quote(&self) -> bool {
        self.double_quote
    }

    /// Whether `'` is a token delimiter.
    pub fn handles_single_quote(&self) -> bool {
        self.single_quote
    }

    /// Whether `c` is a quote character these options recognize as a delimiter.
    pub fn is_quote_delimiter(&self, c: char) -> bool {
        (self.double_quote && c == DOUBLE_QUOTE) || (self.single_quote && c == SINGLE_QUOTE)
    }

    // Preference order when choosing a quote to wrap a value in.
    pub(crate) fn quote_delimiters(&self) -> impl Iterator<Item = char> + '_ {
        [DOUBLE_QUOTE, SINGLE_QUOTE]
            .into_iter()
            .filter(|c| self.is_quote_delimiter(*c))
    }
}
