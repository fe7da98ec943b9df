//! ***Forgiving single-pass HTML tokenizer with a chainable extraction engine.***
//!
//! The crate locates and captures fragments of arbitrary, often malformed, web
//! markup without building a DOM. A query is a chain of steps constraining tag
//! names, nesting and attribute values:
//!
//! ```
//! use html_extractor::{Extractor, ExtractExt};
//!
//! let html = r#"
//!     <div id="content">
//!         <p class="lead">Hello <b>world</b></p>
//!         <span>text<div>x</div>
//!     </div>
//! "#;
//!
//! let mut extractor = Extractor::new(html);
//!
//! assert_eq!(
//!     extractor.tag("div").attr("id", "content").child("p").inner_html().unwrap(),
//!     ["Hello <b>world</b>"]
//! );
//!
//! assert_eq!(html.extract_text(["p", "@@class=^le"]).unwrap(), ["Hello world"]);
//! assert_eq!(html.extract_outer(["span"]).unwrap(), ["<span>text</span>"]);
//! ```
//!
//! Extraction performs one forward pass over the input and never fails except
//! when the tokenizer can't make progress, see [`ParseStallError`].

#![forbid(unsafe_code)]

#[macro_use]
mod debug_trace;

mod errors;
mod html;
mod matching;
mod query;
mod selectors;
mod settings;
mod tokenizer;

#[cfg(test)]
mod test_utils;

pub use self::errors::{EncodingError, ParseStallError};
pub use self::html::{is_boolean_attribute, LocalNameHash, Tag, TagClass};
pub use self::matching::{extract, extract_with, MatchEngine, OutputMode};
pub use self::query::{ExtractExt, Extractor};
pub use self::selectors::{
    AttributePredicate, Constraint, QueryToken, SelectorChain, SelectorStep, TagPattern,
    ValuePredicate,
};
pub use self::settings::{AsciiCompatibleEncoding, Settings};
pub use self::tokenizer::{
    tokenize, Attribute, Attributes, EndTag, Event, EventSink, RawTextKind, StartTag, Tokenizer,
};
