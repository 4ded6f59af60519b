/// Renders a line with a caret pointing at the offset where a problem was found.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::ErrorContext;
///
/// let context = ErrorContext::new("copy \"a b", 5);
/// assert_eq!(context.to_string(), "copy \"a b\n     ^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    line: String,
    offset: usize,
}

impl ErrorContext {
    /// Create the context for the byte `offset` into `line`.
    pub fn new(line: impl Into<String>, offset: usize) -> Self {
        Self {
            line: line.into(),
            offset,
        }
    }

    /// The byte offset being pointed at.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The caret is placed by character (not byte) so multi-byte lines stay aligned.
        let column = self
            .line
            .char_indices()
            .take_while(|(index, _)| *index < self.offset)
            .count();
        let last = self.line.chars().count().saturating_sub(1);

        write!(
            f,
            "{}\n{:width$}^",
            self.line,
            "",
            width = std::cmp::min(column, last)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, "\n^")]
    #[case("abc", 0, "abc\n^")]
    #[case("abc", 1, "abc\n ^")]
    #[case("abc", 2, "abc\n  ^")]
    #[case("abc", 3, "abc\n  ^")]
    #[case("abc", 100, "abc\n  ^")]
    #[case("é \"x", 3, "é \"x\n  ^")]
    fn display(#[case] line: &str, #[case] offset: usize, #[case] expected: &str) {
        let context = ErrorContext::new(line, offset);
        assert_eq!(context.offset(), offset);
        assert_eq!(context.to_string(), expected);
    }
}
