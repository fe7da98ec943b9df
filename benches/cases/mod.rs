pub mod extraction;
pub mod parsing;
