//! `argot` is the text layer underneath a command line argument parser.
//!
//! Argument parsers need two things from the raw text they are given, long before any value is bound to a field:
//! * *Quote-aware tokenizing*:
//! A raw line (ex: from an interactive prompt or a response file) must be split into tokens the way a user expects.
//! Whitespace inside quotes is content, not a separator.
//! Every token must know precisely where it came from, so that completion can map a cursor back onto the token being edited.
//! * *Placeholder expansion*:
//! Help text, examples and default values often want to mention other values, ex: `"Writes to {$output}."`.
//! `argot` expands such placeholders using a tiny expression language.
//!
//! We keep both concerns free of any binding, rendering or console logic.
//! Everything here is a pure function over its input; there is no shared state, so all of it may be used freely across threads.
//!
//! # Tokenizing
//! Split a line with [`tokenize`], configured by [`TokenizerOptions`].
//! The result is a lazy sequence of `Result<Token, TokenizeError>`, which ends at the first error.
//!
//! ```
//! use argot::{tokenize, TokenizerOptions};
//!
//! let line = r#"copy "my file.txt" --to='backup dir'"#;
//! let options = TokenizerOptions::default().handle_single_quote(true);
//! let tokens = tokenize(line, options)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(tokens[0].as_str(), "copy");
//! assert_eq!(tokens[1].as_str(), "my file.txt");
//! assert!(tokens[1].starts_with_quote() && tokens[1].ends_with_quote());
//! // Quotes in the middle of a token remain part of its contents.
//! assert_eq!(tokens[2].as_str(), "--to='backup dir");
//! assert_eq!(tokens[2].outer().as_str(), "--to='backup dir'");
//! ```
//!
//! The tokenizing rules:
//! * Runs of whitespace separate tokens; leading and trailing whitespace never produce a token.
//! * A token which begins with an enabled quote runs until the matching quote of the same kind.
//! Whitespace and the other kind of quote are content in between.
//! * An enabled quote in the middle of a token opens a quoted section within that token, ex: `--name="a b"`.
//! * A closing quote must end the token: it is followed by whitespace, the end of the line, or another quoted section (ex: `"a"'b'`).
//! * `""` is a token with empty contents.
//! * Quote characters that are not enabled are ordinary content.
//!
//! Unless [`TokenizerOptions::allow_partial_input`] is set, an unterminated quote fails with [`TokenizeError::UnterminatedQuotes`] and a closing quote followed by more content fails with [`TokenizeError::QuotesNotAtEndOfToken`].
//! Partial input is meant for lines still being typed; it accepts both situations, keeping the stray quote as content.
//!
//! All offsets are byte offsets into the line.
//! [`ErrorContext`] renders an error offset against its line:
//!
//! ```
//! use argot::{tokenize, TokenizerOptions};
//!
//! let line = r#"open "unfinished"#;
//! let error = tokenize(line, TokenizerOptions::default())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap_err();
//!
//! assert_eq!(error.context(line).to_string(), "open \"unfinished\n     ^");
//! ```
//!
//! [`quote_if_needed`] goes the other way: it quotes a value (ex: a completion candidate) so that it tokenizes back into itself.
//!
//! # Placeholder Expansion
//! [`expand`] copies a template, replacing every `{..}` placeholder with the value of the expression inside it.
//! Variables are resolved through an [`Environment`], which `argot` implements for `HashMap`, `BTreeMap` and closures (via [`FnEnvironment`]).
//!
//! ```
//! use std::collections::HashMap;
//! use argot::expand;
//!
//! let environment = HashMap::from([
//!     ("program".to_string(), "Summer".to_string()),
//!     ("verbose".to_string(), "yes".to_string()),
//! ]);
//!
//! assert_eq!(
//!     expand(&environment, r#"usage: {lower($program)}{if $verbose then " -v" else ""}"#).unwrap(),
//!     "usage: summer -v"
//! );
//! ```
//!
//! ### Expression Language
//! ```console
//! Syntax                          | Meaning
//! ------------------------------------------------------------------------------------------------
//! $name                           | the variable `name` ([A-Za-z0-9]+); undefined variables are ""
//! "text"                          | a literal; escapes \" \\ \n \t
//! a + b                           | concatenation (whitespace around `+` is required)
//! if c then a else b              | `a` when `c` is non-empty, otherwise `b` (so "false" holds)
//! lower(a), upper(a)              | case conversion
//! (a)                             | grouping
//! ```
//!
//! Concatenation associates to the right: `$a + $b + $c` parses as `$a + ($b + $c)`.
//! Expressions nest at most [`MAX_SPECULATION_DEPTH`] levels deep.
//!
//! Expansion is all or nothing.
//! An unterminated `{`, an empty `{}`, or a body that does not parse fails the whole template (see [`ExpandError`]).
//! Placeholders close at the first `}`; braces do not nest, though a `{` may appear inside a string literal.
//!
//! The expression layer is also available directly, via [`parse`] and [`Expression::evaluate`].
//!
//! # Features
//! * `tracing_debug`: Debug logging of tokenizer, parser and expansion decisions via `tracing`.
//! * `unit_test`: For features that help with unit testing (ex: `RecordingEnvironment`).
pub use argot_core::*;
