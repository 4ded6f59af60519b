use crate::model::TokenizerOptions;
use crate::substring::Substring;
use crate::tokens::model::{Token, TokenizeError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Split `line` into tokens, honouring the quote delimiters configured in `options`.
///
/// The tokens are produced lazily, in a single forward pass.
/// The first error ends the sequence.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::{tokenize, TokenizerOptions};
///
/// let tokens: Vec<String> = tokenize(r#"  add "two words"  three "#, TokenizerOptions::default())
///     .map(|token| token.map(|t| t.to_string()))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(tokens, vec!["add", "two words", "three"]);
///
/// let error = tokenize(r#"add "two"#, TokenizerOptions::default())
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap_err();
/// assert_eq!(error.offset(), 4);
/// ```
pub fn tokenize(line: &str, options: TokenizerOptions) -> Tokenizer<'_> {
    Tokenizer::new(line, options)
}

/// The lazy token sequence of a line.
/// See [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokenizer<'s> {
    line: &'s str,
    options: TokenizerOptions,
    position: usize,
    finished: bool,
}

impl<'s> Tokenizer<'s> {
    /// Create the tokenizer for `line`.
    pub fn new(line: &'s str, options: TokenizerOptions) -> Self {
        Self {
            line,
            options,
            position: 0,
            finished: false,
        }
    }

    fn peek(&self, position: usize) -> Option<char> {
        self.line[position..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek(self.position) {
            if !c.is_whitespace() {
                break;
            }

            self.position += c.len_utf8();
        }
    }

    fn scan_token(&mut self) -> Result<Token<'s>, TokenizeError> {
        let start = self.position;
        let partial = self.options.is_partial_input_allowed();
        let mut position = start;
        let mut open_quote: Option<(char, usize)> = None;
        let mut starts_with_quote = false;
        let mut ends_with_quote = false;

        while let Some(c) = self.peek(position) {
            match open_quote {
                Some((quote, _)) if c == quote => {
                    let after = position + c.len_utf8();

                    match self.peek(after) {
                        None => {
                            ends_with_quote = true;
                            position = after;
                            open_quote = None;
                            break;
                        }
                        Some(next) if next.is_whitespace() => {
                            ends_with_quote = true;
                            position = after;
                            open_quote = None;
                            break;
                        }
                        // Adjacent quoted sections join into one token, ex: "a"'b'.
                        Some(next) if self.options.is_quote_delimiter(next) => {
                            position = after;
                            open_quote = None;
                        }
                        Some(_) => {
                            if !partial {
                                return Err(TokenizeError::QuotesNotAtEndOfToken(position));
                            }

                            // Keep the quote as literal content and carry on as an unquoted run.
                            position = after;
                            open_quote = None;
                        }
                    }
                }
                Some(_) => {
                    position += c.len_utf8();
                }
                None => {
                    if c.is_whitespace() {
                        break;
                    }

                    if self.options.is_quote_delimiter(c) {
                        if position == start {
                            starts_with_quote = true;
                        }

                        open_quote = Some((c, position));
                    }

                    position += c.len_utf8();
                }
            }
        }

        if let Some((_, quote_offset)) = open_quote {
            if !partial {
                return Err(TokenizeError::UnterminatedQuotes(quote_offset));
            }
        }

        self.position = position;
        // Quote delimiters are all single byte characters.
        let contents_start = start + usize::from(starts_with_quote);
        let contents_end = position - usize::from(ends_with_quote);
        let contents = Substring::unchecked(self.line, contents_start, contents_end - contents_start);
        Ok(Token::new(contents, starts_with_quote, ends_with_quote))
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = Result<Token<'s>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.skip_whitespace();

        if self.position == self.line.len() {
            self.finished = true;
            return None;
        }

        match self.scan_token() {
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Tokenizing stopped at offset {}: {error}", error.offset());
                }

                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<'s> std::iter::FusedIterator for Tokenizer<'s> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn strict() -> TokenizerOptions {
        TokenizerOptions::default()
    }

    fn both() -> TokenizerOptions {
        TokenizerOptions::default().handle_single_quote(true)
    }

    fn partial() -> TokenizerOptions {
        both().allow_partial_input(true)
    }

    fn collect(line: &str, options: TokenizerOptions) -> Result<Vec<Token<'_>>, TokenizeError> {
        tokenize(line, options).collect()
    }

    fn contents(line: &str, options: TokenizerOptions) -> Vec<String> {
        collect(line, options)
            .unwrap()
            .into_iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("a", vec!["a"])]
    #[case("a b", vec!["a", "b"])]
    #[case("  a  b  ", vec!["a", "b"])]
    #[case("\ta\n\tb\r\n", vec!["a", "b"])]
    #[case("--key=value -v", vec!["--key=value", "-v"])]
    #[case("\"a b\" c", vec!["a b", "c"])]
    #[case("c \"a b\"", vec!["c", "a b"])]
    #[case("\"\"", vec![""])]
    #[case("'a b'", vec!["'a", "b'"])]
    #[case("\"it's\"", vec!["it's"])]
    #[case("--name=\"a b\"", vec!["--name=\"a b"])]
    #[case("\"a\"\"b\"", vec!["a\"\"b"])]
    #[case("héllo wörld", vec!["héllo", "wörld"])]
    #[case("a\u{3000}b", vec!["a", "b"])]
    fn tokenize_default(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(contents(line, strict()), expected);
    }

    #[rstest]
    #[case("'a b' c", vec!["a b", "c"])]
    #[case("\"a 'b' c\"", vec!["a 'b' c"])]
    #[case("'a \"b\" c'", vec!["a \"b\" c"])]
    #[case("\"a\"'b'", vec!["a\"'b"])]
    #[case("''", vec![""])]
    fn tokenize_both_quotes(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(contents(line, both()), expected);
    }

    #[rstest]
    #[case("\"a b\" 'c d'", vec!["\"a", "b\"", "'c", "d'"])]
    #[case("a\"b", vec!["a\"b"])]
    #[case("\"", vec!["\""])]
    fn tokenize_no_quotes(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(contents(line, TokenizerOptions::none()), expected);
    }

    #[test]
    fn empty_quoted_token() {
        // Setup
        let line = "a \"\" b";

        // Execute
        let tokens = collect(line, strict()).unwrap();

        // Verify
        assert_eq!(tokens.len(), 3);
        let middle = &tokens[1];
        assert_eq!(middle.contents().len(), 0);
        assert!(middle.starts_with_quote());
        assert!(middle.ends_with_quote());
        assert_eq!(middle.contents().starting_offset(), 3);
        assert_eq!(middle.outer_starting_offset(), 2);
        assert_eq!(middle.outer_ending_offset(), 4);
    }

    #[rstest]
    #[case("a", 0, 1, false, false, 0, 1)]
    #[case("  abc ", 2, 3, false, false, 2, 5)]
    #[case("x \"a b\"", 3, 3, true, true, 2, 7)]
    #[case("x 'a b'", 3, 3, true, true, 2, 7)]
    #[case("--name=\"a b\" y", 0, 11, false, true, 0, 12)]
    #[case("\"a\"'b'", 1, 4, true, true, 0, 6)]
    fn offsets(
        #[case] line: &str,
        #[case] contents_start: usize,
        #[case] contents_length: usize,
        #[case] starts_with_quote: bool,
        #[case] ends_with_quote: bool,
        #[case] outer_start: usize,
        #[case] outer_end: usize,
    ) {
        // Setup
        let tokens = collect(line, both()).unwrap();
        let token = tokens
            .iter()
            .find(|t| t.outer_starting_offset() == outer_start)
            .unwrap();

        // Verify
        assert_eq!(token.contents().starting_offset(), contents_start);
        assert_eq!(token.contents().len(), contents_length);
        assert_eq!(token.starts_with_quote(), starts_with_quote);
        assert_eq!(token.ends_with_quote(), ends_with_quote);
        assert_eq!(token.outer_ending_offset(), outer_end);
    }

    #[rstest]
    #[case("a \"b c\" d")]
    #[case("'x' \"\" 'y z'")]
    #[case("  \"lead\"")]
    #[case("--opt='v w'")]
    fn outer_span_reproduces_quoted_text(#[case] line: &str) {
        for token in collect(line, both()).unwrap() {
            let outer = &line[token.outer_starting_offset()..token.outer_ending_offset()];
            assert_eq!(outer, token.outer().as_str());

            if token.starts_with_quote() {
                assert_eq!(
                    line[..token.contents().starting_offset()].chars().last(),
                    outer.chars().next()
                );
                assert!(both().is_quote_delimiter(outer.chars().next().unwrap()));
            }

            if token.ends_with_quote() {
                assert!(both().is_quote_delimiter(
                    line[token.contents().ending_offset()..].chars().next().unwrap()
                ));
            }
        }
    }

    #[rstest]
    #[case("\"abc", 0)]
    #[case("a \"b c", 2)]
    #[case("a=\"b", 2)]
    #[case("\"a\"\"", 3)]
    #[case("\"a\" \"", 4)]
    fn unterminated_quotes(#[case] line: &str, #[case] offset: usize) {
        assert_eq!(
            collect(line, strict()).unwrap_err(),
            TokenizeError::UnterminatedQuotes(offset)
        );
    }

    #[rstest]
    #[case("\"a\"b", 2)]
    #[case("x \"a b\"c", 6)]
    #[case("a=\"b\"c", 4)]
    #[case("\"a\"'b'", 2)]
    fn quotes_not_at_end_of_token(#[case] line: &str, #[case] offset: usize) {
        assert_eq!(
            collect(line, strict()).unwrap_err(),
            TokenizeError::QuotesNotAtEndOfToken(offset)
        );
    }

    #[test]
    fn error_ends_sequence() {
        // Setup
        let mut tokenizer = tokenize("ok \"bad", strict());

        // Execute & Verify
        assert_eq!(tokenizer.next().unwrap().unwrap().as_str(), "ok");
        assert_matches!(tokenizer.next(), Some(Err(TokenizeError::UnterminatedQuotes(3))));
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.next(), None);
    }

    #[rstest]
    #[case("\"abc", "abc", true, false)]
    #[case("a \"b c", "b c", true, false)]
    #[case("\"", "", true, false)]
    #[case("x=\"b c", "x=\"b c", false, false)]
    #[case("\"a\"b", "a\"b", true, false)]
    #[case("\"a\"b\"", "a\"b\"", true, false)]
    fn partial_input(
        #[case] line: &str,
        #[case] expected: &str,
        #[case] starts_with_quote: bool,
        #[case] ends_with_quote: bool,
    ) {
        // Execute
        let tokens = collect(line, partial()).unwrap();

        // Verify
        let last = tokens.last().unwrap();
        assert_eq!(last.as_str(), expected);
        assert_eq!(last.starts_with_quote(), starts_with_quote);
        assert_eq!(last.ends_with_quote(), ends_with_quote);
        assert_eq!(last.outer_ending_offset(), line.len());
    }

    #[test]
    fn whitespace_idempotence() {
        let words = ["alpha", "\"b c\"", "'d'", "--e=\"f g\"", "h"];
        let expected = contents(&words.join(" "), both());
        let whitespace = [" ", "\t", "\n", "  ", " \t "];

        for _ in 0..100 {
            let mut line = String::default();

            for word in &words {
                let count = thread_rng().gen_range(1..4);
                for _ in 0..count {
                    line.push_str(whitespace[thread_rng().gen_range(0..whitespace.len())]);
                }
                line.push_str(word);
            }

            line.push_str(whitespace[thread_rng().gen_range(0..whitespace.len())]);
            assert_eq!(contents(&line, both()), expected, "line: {line:?}");
        }
    }

    #[test]
    fn odd_quote_count_fails() {
        let alphabet = ['a', 'b', ' ', '"'];

        for _ in 0..500 {
            let length = thread_rng().gen_range(0..12);
            let line: String = (0..length)
                .map(|_| alphabet[thread_rng().gen_range(0..alphabet.len())])
                .collect();
            let quotes = line.chars().filter(|c| *c == '"').count();
            let result = collect(&line, strict());

            if quotes % 2 == 1 {
                assert!(result.is_err(), "line: {line:?}");
            }

            // Partial input is tolerated regardless of the quote balance.
            assert!(
                collect(&line, strict().allow_partial_input(true)).is_ok(),
                "line: {line:?}"
            );
        }
    }
}
