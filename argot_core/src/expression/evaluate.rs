use thiserror::Error;

use crate::expression::ast::Expression;
use crate::expression::environment::Environment;

/// Errors from [`Expression::evaluate`].
///
/// Expressions produced by [`parse`](crate::parse) always evaluate; these only arise from hand built expressions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluateError {
    /// A variable name outside of `[A-Za-z0-9]+`.
    #[error("Invalid variable name '{0}'.")]
    InvalidVariableName(String),
}

impl Expression {
    /// Evaluate this expression against `environment`.
    ///
    /// Undefined variables evaluate to the empty string.
    /// A condition holds when it evaluates to a non-empty string (so `"false"` holds).
    ///
    /// ### Example
    /// ```
    /// # use argot_core as argot;
    /// use std::collections::HashMap;
    /// use argot::Expression;
    ///
    /// let environment = HashMap::from([("a".to_string(), "MiXeD".to_string())]);
    /// let expression = Expression::parse(r#"upper($a) + "-" + lower($a) + $undefined"#).unwrap();
    /// assert_eq!(expression.evaluate(&environment).unwrap(), "MIXED-mixed");
    /// ```
    pub fn evaluate(&self, environment: &dyn Environment) -> Result<String, EvaluateError> {
        match self {
            Expression::Literal(value) => Ok(value.clone()),
            Expression::Variable(name) => {
                if !is_variable_name(name) {
                    return Err(EvaluateError::InvalidVariableName(name.clone()));
                }

                Ok(environment.variable(name).unwrap_or_default())
            }
            Expression::Concatenation { left, right } => {
                let mut value = left.evaluate(environment)?;
                value.push_str(&right.evaluate(environment)?);
                Ok(value)
            }
            Expression::Conditional {
                condition,
                then,
                otherwise,
            } => {
                if !condition.evaluate(environment)?.is_empty() {
                    then.evaluate(environment)
                } else {
                    match otherwise {
                        Some(otherwise) => otherwise.evaluate(environment),
                        None => Ok(String::default()),
                    }
                }
            }
            Expression::Operator { operator, operand } => {
                Ok(operator.apply(&operand.evaluate(environment)?))
            }
            Expression::Parenthesis(inner) => inner.evaluate(environment),
        }
    }
}

fn is_variable_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}
