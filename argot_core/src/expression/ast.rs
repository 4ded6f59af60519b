use std::str::FromStr;

use crate::expression::parser::{parse, ParseError};

/// A unary case conversion applied in prefix-call syntax, ex: `lower($name)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `lower(..)`: convert to lowercase.
    Lower,
    /// `upper(..)`: convert to uppercase.
    Upper,
}

impl Operator {
    pub(crate) const ALL: [Operator; 2] = [Operator::Lower, Operator::Upper];

    /// The keyword naming this operator in an expression.
    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::Lower => "lower",
            Operator::Upper => "upper",
        }
    }

    /// Apply the (locale independent) case conversion to `value`.
    pub fn apply(&self, value: &str) -> String {
        match self {
            Operator::Lower => value.to_lowercase(),
            Operator::Upper => value.to_uppercase(),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A placeholder expression.
///
/// Expressions are built bottom-up, either by [`parse`](crate::parse) or via the constructor functions, and are never mutated afterwards.
/// `Display` renders the canonical surface syntax, which parses back into an equal expression.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::{Expression, Operator};
///
/// let expression: Expression = r#"upper($name) + "!""#.parse().unwrap();
/// assert_eq!(
///     expression,
///     Expression::concatenation(
///         Expression::operator(Operator::Upper, Expression::variable("name")),
///         Expression::literal("!"),
///     )
/// );
/// assert_eq!(expression.to_string(), r#"upper($name) + "!""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A string literal, ex: `"text"`.
    Literal(String),
    /// A variable reference, ex: `$name`.
    Variable(String),
    /// `left + right`.
    Concatenation {
        /// The left operand.
        left: Box<Expression>,
        /// The right operand.
        right: Box<Expression>,
    },
    /// `if condition then .. else ..`.
    Conditional {
        /// Selects `then` when it evaluates to a non-empty string.
        condition: Box<Expression>,
        /// The expression used when the condition holds.
        then: Box<Expression>,
        /// The expression used when the condition does not hold; empty when absent.
        otherwise: Option<Box<Expression>>,
    },
    /// `operator(operand)`.
    Operator {
        /// The case conversion.
        operator: Operator,
        /// The converted expression.
        operand: Box<Expression>,
    },
    /// `(inner)`.
    Parenthesis(Box<Expression>),
}

impl Expression {
    /// A string literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Expression::Literal(value.into())
    }

    /// A variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    /// `left + right`.
    pub fn concatenation(left: Expression, right: Expression) -> Self {
        Expression::Concatenation {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `if condition then then else otherwise`.
    pub fn conditional(condition: Expression, then: Expression, otherwise: Option<Expression>) -> Self {
        Expression::Conditional {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: otherwise.map(Box::new),
        }
    }

    /// `operator(operand)`.
    pub fn operator(operator: Operator, operand: Expression) -> Self {
        Expression::Operator {
            operator,
            operand: Box::new(operand),
        }
    }

    /// `(inner)`.
    pub fn parenthesis(inner: Expression) -> Self {
        Expression::Parenthesis(Box::new(inner))
    }

    /// Parse a placeholder body.
    /// See [`parse`](crate::parse).
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        parse(content)
    }

    // Whether this renders as a `unary_expr` in the grammar (the only legal left operand of `+`).
    fn is_unary(&self) -> bool {
        matches!(
            self,
            Expression::Literal(_)
                | Expression::Variable(_)
                | Expression::Operator { .. }
                | Expression::Parenthesis(_)
        )
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(value) => {
                write!(f, "\"")?;
                for c in value.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                write!(f, "\"")
            }
            Expression::Variable(name) => write!(f, "${name}"),
            Expression::Concatenation { left, right } => {
                // Hand built trees may hold shapes the grammar cannot express directly, so those are bracketed.
                if left.is_unary() {
                    write!(f, "{left}")?;
                } else {
                    write!(f, "({left})")?;
                }

                if matches!(**right, Expression::Conditional { .. }) {
                    write!(f, " + ({right})")
                } else {
                    write!(f, " + {right}")
                }
            }
            Expression::Conditional {
                condition,
                then,
                otherwise,
            } => {
                if matches!(**condition, Expression::Conditional { .. }) {
                    write!(f, "if ({condition}) then {then} else ")?;
                } else {
                    write!(f, "if {condition} then {then} else ")?;
                }

                match otherwise {
                    Some(otherwise) => write!(f, "{otherwise}"),
                    None => write!(f, "\"\""),
                }
            }
            Expression::Operator { operator, operand } => write!(f, "{operator}({operand})"),
            Expression::Parenthesis(inner) => write!(f, "({inner})"),
        }
    }
}
