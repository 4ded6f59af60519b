use thiserror::Error;

use crate::constant::MAX_SPECULATION_DEPTH;
use crate::expression::ast::{Expression, Operator};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Errors from [`parse`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The content is not a single well formed expression.
    /// The offset is where parsing stopped (`0` when nothing matched).
    #[error("Syntax error: invalid expression (offset={0}).")]
    Syntax(usize),

    /// The expression nests sub-expressions deeper than the limit.
    #[error("Syntax error: expression nests deeper than {0} levels.")]
    DepthExceeded(usize),
}

/// Parse the body of a placeholder into an [`Expression`].
///
/// The whole of `content` must be one expression, optionally surrounded by whitespace.
/// The grammar, with alternatives tried in order (first match wins):
/// ```text
/// expr           := ws* inner_expr ws*
/// inner_expr     := if_then_else | concat_expr
/// if_then_else   := "if" ws+ concat_expr ws+ "then" ws+ inner_expr ws+ "else" ws+ inner_expr
/// concat_expr    := unary_expr ws+ "+" ws+ concat_expr | unary_expr
/// unary_expr     := ("lower" | "upper") ws* "(" expr ")" | primary_expr
/// primary_expr   := "$" [A-Za-z0-9]+ | "\"" literal_chars "\"" | "(" expr ")"
/// ```
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::{parse, Expression, ParseError};
///
/// assert_eq!(
///     parse(r#" if $verbose then "-v" else "" "#).unwrap(),
///     Expression::conditional(
///         Expression::variable("verbose"),
///         Expression::literal("-v"),
///         Some(Expression::literal("")),
///     )
/// );
/// assert_eq!(parse("$a $b"), Err(ParseError::Syntax(3)));
/// ```
pub fn parse(content: &str) -> Result<Expression, ParseError> {
    let parser = ExpressionParser { input: content };

    let result = match parser.expression(0, 0)? {
        Some((expression, position)) if position == content.len() => Ok(expression),
        Some((_, position)) => Err(ParseError::Syntax(position)),
        None => Err(ParseError::Syntax(0)),
    };

    #[cfg(feature = "tracing_debug")]
    {
        if let Err(error) = &result {
            debug!("Expression '{content}' failed to parse: {error}");
        }
    }

    result
}

// A successful match yields the expression and the position just past it.
// No match is `Ok(None)`, leaving the caller to try its next alternative from the position it held.
// `Err` is reserved for the depth guard, which aborts every alternative.
type Production = Result<Option<(Expression, usize)>, ParseError>;

struct ExpressionParser<'s> {
    input: &'s str,
}

fn descend(depth: usize) -> Result<usize, ParseError> {
    let depth = depth + 1;

    if depth > MAX_SPECULATION_DEPTH {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Expression nesting exceeds {MAX_SPECULATION_DEPTH}.");
        }

        Err(ParseError::DepthExceeded(MAX_SPECULATION_DEPTH))
    } else {
        Ok(depth)
    }
}

impl<'s> ExpressionParser<'s> {
    // expr := ws* inner_expr ws*
    fn expression(&self, position: usize, depth: usize) -> Production {
        let position = self.whitespace(position);

        Ok(self
            .inner_expression(position, depth)?
            .map(|(expression, position)| (expression, self.whitespace(position))))
    }

    // inner_expr := if_then_else | concat_expr
    fn inner_expression(&self, position: usize, depth: usize) -> Production {
        if let Some(found) = self.conditional(position, depth)? {
            return Ok(Some(found));
        }

        self.concatenation(position, depth)
    }

    // if_then_else := "if" ws+ concat_expr ws+ "then" ws+ inner_expr ws+ "else" ws+ inner_expr
    fn conditional(&self, position: usize, depth: usize) -> Production {
        let Some(position) = self.keyword(position, "if") else {
            return Ok(None);
        };
        let depth = descend(depth)?;
        let Some((condition, position)) = self.concatenation(position, depth)? else {
            return Ok(None);
        };
        let Some(position) = self.infix(position, "then") else {
            return Ok(None);
        };
        let Some((then, position)) = self.inner_expression(position, depth)? else {
            return Ok(None);
        };
        let Some(position) = self.infix(position, "else") else {
            return Ok(None);
        };
        let Some((otherwise, position)) = self.inner_expression(position, depth)? else {
            return Ok(None);
        };

        Ok(Some((
            Expression::conditional(condition, then, Some(otherwise)),
            position,
        )))
    }

    // concat_expr := unary_expr ws+ "+" ws+ concat_expr | unary_expr
    //
    // Both alternatives begin with the same unary_expr, so it is matched once and shared.
    // Re-matching it per alternative is exponential in the parenthesis nesting.
    fn concatenation(&self, position: usize, depth: usize) -> Production {
        let Some((left, after_left)) = self.unary(position, depth)? else {
            return Ok(None);
        };

        if let Some(position) = self.infix(after_left, "+") {
            let depth = descend(depth)?;

            if let Some((right, position)) = self.concatenation(position, depth)? {
                return Ok(Some((Expression::concatenation(left, right), position)));
            }
        }

        Ok(Some((left, after_left)))
    }

    // unary_expr := unary_operator ws* "(" expr ")" | primary_expr
    fn unary(&self, position: usize, depth: usize) -> Production {
        if let Some(found) = self.operator_application(position, depth)? {
            return Ok(Some(found));
        }

        self.primary(position, depth)
    }

    fn operator_application(&self, position: usize, depth: usize) -> Production {
        let Some((operator, position)) = Operator::ALL
            .into_iter()
            .find_map(|operator| Some((operator, self.symbol(position, operator.keyword())?)))
        else {
            return Ok(None);
        };
        let position = self.whitespace(position);
        let Some((operand, position)) = self.group(position, depth)? else {
            return Ok(None);
        };

        Ok(Some((Expression::operator(operator, operand), position)))
    }

    // primary_expr := variable_expr | literal_expr | parenthetical_expr
    fn primary(&self, position: usize, depth: usize) -> Production {
        if let Some(found) = self.variable(position) {
            return Ok(Some(found));
        }

        if let Some(found) = self.literal(position) {
            return Ok(Some(found));
        }

        Ok(self
            .group(position, depth)?
            .map(|(inner, position)| (Expression::parenthesis(inner), position)))
    }

    // "(" expr ")"
    fn group(&self, position: usize, depth: usize) -> Production {
        let Some(position) = self.symbol(position, "(") else {
            return Ok(None);
        };
        let depth = descend(depth)?;
        let Some((inner, position)) = self.expression(position, depth)? else {
            return Ok(None);
        };

        Ok(self.symbol(position, ")").map(|position| (inner, position)))
    }

    // variable_expr := "$" [A-Za-z0-9]+
    fn variable(&self, position: usize) -> Option<(Expression, usize)> {
        let start = self.symbol(position, "$")?;
        let rest = &self.input[start..];
        let length = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());

        if length == 0 {
            return None;
        }

        Some((Expression::variable(&rest[..length]), start + length))
    }

    // literal_expr := "\"" literal_chars "\""
    fn literal(&self, position: usize) -> Option<(Expression, usize)> {
        let mut position = self.symbol(position, "\"")?;
        let mut chars = self.input[position..].chars();
        let mut value = String::default();

        loop {
            // Running out of input means the literal (or an escape in it) is unterminated.
            let c = chars.next()?;
            position += c.len_utf8();

            match c {
                '"' => return Some((Expression::Literal(value), position)),
                '\\' => {
                    let escaped = chars.next()?;
                    position += escaped.len_utf8();
                    value.push(match escaped {
                        '"' => '"',
                        '\\' => '\\',
                        'n' => '\n',
                        't' => '\t',
                        _ => return None,
                    });
                }
                _ => value.push(c),
            }
        }
    }

    fn symbol(&self, position: usize, text: &str) -> Option<usize> {
        self.input[position..]
            .starts_with(text)
            .then(|| position + text.len())
    }

    // ws*
    fn whitespace(&self, position: usize) -> usize {
        let rest = &self.input[position..];
        position + (rest.len() - rest.trim_start().len())
    }

    // ws+
    fn whitespace1(&self, position: usize) -> Option<usize> {
        let after = self.whitespace(position);
        (after > position).then_some(after)
    }

    // text ws+
    fn keyword(&self, position: usize, text: &str) -> Option<usize> {
        let position = self.symbol(position, text)?;
        self.whitespace1(position)
    }

    // ws+ text ws+
    fn infix(&self, position: usize, text: &str) -> Option<usize> {
        let position = self.whitespace1(position)?;
        self.keyword(position, text)
    }
}
