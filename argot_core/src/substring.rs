use thiserror::Error;

/// Errors from constructing a [`Substring`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubstringError {
    /// The requested window does not fit within its enclosing string.
    #[error("Window (offset={offset}, length={length}) does not fit within {bound} bytes.")]
    OutOfRange {
        /// The requested starting offset.
        offset: usize,
        /// The requested length.
        length: usize,
        /// The length of the enclosing string or substring.
        bound: usize,
    },

    /// The requested window would split a multi-byte character.
    #[error("Offset {0} does not fall on a character boundary.")]
    NotCharBoundary(usize),
}

/// An immutable `[offset, offset + length)` window over a backing string.
///
/// Offsets are byte offsets into the backing string.
/// Equality compares the backing string content together with the window, so two windows over equal lines are equal.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::Substring;
///
/// let line = "git commit --amend";
/// let command = Substring::new(line, 4, 6).unwrap();
/// assert_eq!(command.as_str(), "commit");
///
/// // Nested windows are relative to the enclosing window.
/// let tail = Substring::within(&command, 3, 3).unwrap();
/// assert_eq!(tail.as_str(), "mit");
/// assert_eq!(tail.starting_offset(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Substring<'s> {
    base: &'s str,
    offset: usize,
    length: usize,
}

impl<'s> Substring<'s> {
    /// The window covering `base` from `offset` until its end.
    pub fn from_offset(base: &'s str, offset: usize) -> Result<Self, SubstringError> {
        let length = base.len().checked_sub(offset).ok_or(SubstringError::OutOfRange {
            offset,
            length: 0,
            bound: base.len(),
        })?;
        Self::new(base, offset, length)
    }

    /// The window covering `length` bytes of `base`, starting at `offset`.
    pub fn new(base: &'s str, offset: usize, length: usize) -> Result<Self, SubstringError> {
        check_window(base.len(), offset, length)?;

        for boundary in [offset, offset + length] {
            if !base.is_char_boundary(boundary) {
                return Err(SubstringError::NotCharBoundary(boundary));
            }
        }

        Ok(Self {
            base,
            offset,
            length,
        })
    }

    /// The window covering `length` bytes of `outer`, starting at `offset` relative to `outer`.
    ///
    /// Bounds are validated against `outer` rather than against the backing string.
    pub fn within(outer: &Substring<'s>, offset: usize, length: usize) -> Result<Self, SubstringError> {
        check_window(outer.length, offset, length)?;
        Self::new(outer.base, outer.offset + offset, length)
    }

    /// The window covering `outer` from the relative `offset` until the end of `outer`.
    pub fn within_from(outer: &Substring<'s>, offset: usize) -> Result<Self, SubstringError> {
        let length = outer
            .length
            .checked_sub(offset)
            .ok_or(SubstringError::OutOfRange {
                offset,
                length: 0,
                bound: outer.length,
            })?;
        Self::within(outer, offset, length)
    }

    // Only for windows the caller has already proven valid.
    pub(crate) fn unchecked(base: &'s str, offset: usize, length: usize) -> Self {
        debug_assert!(Self::new(base, offset, length).is_ok());
        Self {
            base,
            offset,
            length,
        }
    }

    /// The full backing string.
    pub fn base(&self) -> &'s str {
        self.base
    }

    /// The byte offset in the backing string at which this window starts.
    pub fn starting_offset(&self) -> usize {
        self.offset
    }

    /// The byte offset in the backing string just past this window.
    pub fn ending_offset(&self) -> usize {
        self.offset + self.length
    }

    /// The length of this window, in bytes.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether this window is zero-length.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The windowed characters.
    pub fn as_str(&self) -> &'s str {
        &self.base[self.offset..self.ending_offset()]
    }

    /// The character starting at the relative byte `index`, if any.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.as_str().get(index..)?.chars().next()
    }

    /// Whether the window contains `c`.
    pub fn contains(&self, c: char) -> bool {
        self.as_str().contains(c)
    }

    /// Whether the window contains a character matching `predicate`.
    pub fn contains_matching(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.as_str().chars().any(predicate)
    }

    /// The relative byte index of the first `c`, or `None` when absent.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.as_str().find(c)
    }
}

impl<'s> std::fmt::Display for Substring<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn check_window(bound: usize, offset: usize, length: usize) -> Result<(), SubstringError> {
    match offset.checked_add(length) {
        Some(end) if end <= bound => Ok(()),
        _ => Err(SubstringError::OutOfRange {
            offset,
            length,
            bound,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, 0, "")]
    #[case("abc", 0, 3, "abc")]
    #[case("abc", 1, 1, "b")]
    #[case("abc", 3, 0, "")]
    #[case("héllo", 1, 2, "é")]
    fn new(#[case] base: &str, #[case] offset: usize, #[case] length: usize, #[case] expected: &str) {
        let substring = Substring::new(base, offset, length).unwrap();
        assert_eq!(substring.as_str(), expected);
        assert_eq!(substring.to_string(), expected);
        assert_eq!(substring.starting_offset(), offset);
        assert_eq!(substring.ending_offset(), offset + length);
        assert_eq!(substring.len(), length);
        assert_eq!(substring.is_empty(), length == 0);
        assert_eq!(substring.base(), base);
    }

    #[rstest]
    #[case("abc", 4, 0)]
    #[case("abc", 0, 4)]
    #[case("abc", 2, 2)]
    #[case("abc", usize::MAX, 1)]
    #[case("", 1, 0)]
    fn new_out_of_range(#[case] base: &str, #[case] offset: usize, #[case] length: usize) {
        assert_eq!(
            Substring::new(base, offset, length).unwrap_err(),
            SubstringError::OutOfRange {
                offset,
                length,
                bound: base.len(),
            }
        );
    }

    #[rstest]
    #[case(2, 1, 2)]
    #[case(1, 1, 2)]
    #[case(0, 2, 2)]
    fn new_not_char_boundary(#[case] offset: usize, #[case] length: usize, #[case] boundary: usize) {
        assert_eq!(
            Substring::new("héllo", offset, length).unwrap_err(),
            SubstringError::NotCharBoundary(boundary)
        );
    }

    #[rstest]
    #[case(0, "abc def")]
    #[case(4, "def")]
    #[case(7, "")]
    fn from_offset(#[case] offset: usize, #[case] expected: &str) {
        let substring = Substring::from_offset("abc def", offset).unwrap();
        assert_eq!(substring.as_str(), expected);
    }

    #[test]
    fn from_offset_out_of_range() {
        assert_matches!(
            Substring::from_offset("abc", 4),
            Err(SubstringError::OutOfRange { offset: 4, .. })
        );
    }

    #[test]
    fn within() {
        // Setup
        let outer = Substring::new("0123456789", 2, 6).unwrap();

        // Execute
        let inner = Substring::within(&outer, 1, 3).unwrap();
        let innermost = Substring::within(&inner, 1, 2).unwrap();
        let rest = Substring::within_from(&outer, 4).unwrap();

        // Verify
        assert_eq!(inner.as_str(), "345");
        assert_eq!(inner.starting_offset(), 3);
        assert_eq!(innermost.as_str(), "45");
        assert_eq!(innermost.starting_offset(), 4);
        assert_eq!(rest.as_str(), "67");
    }

    #[rstest]
    #[case(0, 7)]
    #[case(5, 2)]
    #[case(7, 0)]
    fn within_validates_against_outer(#[case] offset: usize, #[case] length: usize) {
        // The backing string has room for these windows, but the outer window does not.
        let outer = Substring::new("0123456789", 2, 6).unwrap();
        assert_eq!(
            Substring::within(&outer, offset, length).unwrap_err(),
            SubstringError::OutOfRange {
                offset,
                length,
                bound: 6,
            }
        );
    }

    #[test]
    fn within_from_out_of_range() {
        let outer = Substring::new("0123456789", 2, 6).unwrap();
        assert_matches!(
            Substring::within_from(&outer, 7),
            Err(SubstringError::OutOfRange { bound: 6, .. })
        );
    }

    #[test]
    fn queries() {
        let substring = Substring::new("a b=c d", 2, 3).unwrap();
        assert_eq!(substring.as_str(), "b=c");
        assert_eq!(substring.char_at(0), Some('b'));
        assert_eq!(substring.char_at(2), Some('c'));
        assert_eq!(substring.char_at(3), None);
        assert!(substring.contains('='));
        assert!(!substring.contains('a'));
        assert!(!substring.contains(' '));
        assert!(substring.contains_matching(|c| c.is_ascii_lowercase()));
        assert!(!substring.contains_matching(char::is_whitespace));
        assert_eq!(substring.index_of('='), Some(1));
        assert_eq!(substring.index_of('d'), None);
    }

    #[test]
    fn char_at_mid_character() {
        let substring = Substring::from_offset("é", 0).unwrap();
        assert_eq!(substring.char_at(0), Some('é'));
        assert_eq!(substring.char_at(1), None);
    }

    #[test]
    fn equality_by_value() {
        let left = String::from("abc abc");
        let right = String::from("abc abc");
        assert_eq!(
            Substring::new(&left, 0, 3).unwrap(),
            Substring::new(&right, 0, 3).unwrap()
        );
        // Same characters, different window.
        assert_ne!(
            Substring::new(&left, 0, 3).unwrap(),
            Substring::new(&left, 4, 3).unwrap()
        );
        assert_ne!(
            Substring::new("abc", 0, 3).unwrap(),
            Substring::new("abcd", 0, 3).unwrap()
        );
    }
}
