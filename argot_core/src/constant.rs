pub(crate) const DOUBLE_QUOTE: char = '"';
pub(crate) const SINGLE_QUOTE: char = '\'';

pub(crate) const PLACEHOLDER_OPEN: char = '{';
pub(crate) const PLACEHOLDER_CLOSE: char = '}';

/// The deepest nesting of sub-expressions the expression parser will descend into.
///
/// Parenthesis bodies, operator operands, conditional parts and the right operand of `+` each count as one level.
pub const MAX_SPECULATION_DEPTH: usize = 50;
