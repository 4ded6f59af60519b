//! Core module for `argot`.
//! See [documentation root](https://docs.rs/argot/latest/argot/index.html) for full details.
#![deny(missing_docs)]
mod constant;
mod context;
mod expand;
mod expression;
mod model;
mod substring;
mod tokens;

pub use constant::MAX_SPECULATION_DEPTH;
pub use context::ErrorContext;
pub use expand::*;
pub use expression::*;
pub use model::*;
pub use substring::*;
pub use tokens::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
