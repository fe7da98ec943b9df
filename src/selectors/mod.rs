//! Compiler for the query token grammar.
//!
//! A query is a chain of steps, each constraining a tag name, a position
//! relative to the previous step and, optionally, attribute values.

mod attribute_predicate;
mod compiler;
mod step;
mod token;

pub use self::attribute_predicate::{AttributePredicate, ValuePredicate};
pub use self::compiler::SelectorChain;
pub use self::step::{Constraint, SelectorStep, TagPattern};
pub use self::token::QueryToken;
