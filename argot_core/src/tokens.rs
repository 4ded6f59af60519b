mod model;
mod quote;
mod tokenizer;

pub use model::*;
pub use quote::quote_if_needed;
pub use tokenizer::{tokenize, Tokenizer};
