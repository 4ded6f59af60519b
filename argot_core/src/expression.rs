mod ast;
mod environment;
mod evaluate;
mod parser;

pub use ast::*;
pub use environment::*;
pub use evaluate::EvaluateError;
pub use parser::{parse, ParseError};
