//! Fluent query interface.
//!
//! ```
//! use html_extractor::Extractor;
//!
//! let html = r#"<div id="a"><p>Hello</p><p class="x">World</p></div>"#;
//! let mut extractor = Extractor::new(html);
//!
//! assert_eq!(
//!     extractor.anchor("div").child("p").outer_html().unwrap(),
//!     ["<p>Hello</p>", r#"<p class="x">World</p>"#]
//! );
//!
//! // The chain is reset after each query.
//! assert_eq!(
//!     extractor.tag("p").attr("class", "x").texts().unwrap(),
//!     ["World"]
//! );
//! ```

mod ext;

use crate::errors::ParseStallError;
use crate::matching::{extract_with, OutputMode};
use crate::selectors::{AttributePredicate, Constraint, SelectorChain, SelectorStep, TagPattern};
use crate::settings::Settings;
use crate::tokenizer::Attributes;
use std::borrow::Cow;
use std::mem;

pub use self::ext::ExtractExt;

/// Accumulates a selector chain and runs it over the input.
///
/// Every terminal operation performs one pass over the input and then clears
/// the chain, so the same extractor can be reused for an unrelated query.
#[derive(Debug, Clone)]
pub struct Extractor<'h> {
    input: Cow<'h, str>,
    chain: SelectorChain,
}

impl<'h> Extractor<'h> {
    #[inline]
    pub fn new(input: &'h str) -> Self {
        Extractor {
            input: Cow::Borrowed(input),
            chain: SelectorChain::new(),
        }
    }

    /// Creates an extractor for byte input decoded with the encoding from
    /// `settings`.
    #[inline]
    pub fn from_bytes(input: &'h [u8], settings: &Settings) -> Self {
        Extractor {
            input: settings.decode(input),
            chain: SelectorChain::new(),
        }
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    pub fn chain(&self) -> &SelectorChain {
        &self.chain
    }

    fn step(&mut self, name: &str, constraint: Constraint) -> &mut Self {
        self.chain
            .push_step(SelectorStep::new(TagPattern::parse(name), constraint));

        self
    }

    /// Adds a step that must match the first tag of the document.
    #[inline]
    pub fn anchor(&mut self, name: &str) -> &mut Self {
        self.step(name, Constraint::Anchor)
    }

    /// Adds a step that must be a direct child of the previous step's match.
    #[inline]
    pub fn child(&mut self, name: &str) -> &mut Self {
        self.step(name, Constraint::DirectChild)
    }

    /// Adds a step matching `name` (or any tag for `*`) at any depth.
    #[inline]
    pub fn tag(&mut self, name: &str) -> &mut Self {
        self.step(name, Constraint::Descendant)
    }

    /// Requires the last step's attribute to be equal to `value`.
    #[inline]
    pub fn attr(&mut self, name: &str, value: &str) -> &mut Self {
        self.chain
            .push_predicate(AttributePredicate::exact(name, value));

        self
    }

    /// Requires the last step's attribute to match the regular expression
    /// `pattern`. An invalid pattern never matches.
    #[inline]
    pub fn attr_matching(&mut self, name: &str, pattern: &str) -> &mut Self {
        self.chain
            .push_predicate(AttributePredicate::pattern(name, pattern));

        self
    }

    /// Adds a textual query token, see [`QueryToken`](crate::QueryToken).
    #[inline]
    pub fn token(&mut self, token: &str) -> &mut Self {
        self.chain.push_token(token);

        self
    }

    pub fn tokens<I>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            self.chain.push_token(token.as_ref());
        }

        self
    }

    fn run<F, R>(&mut self, mode: &OutputMode, transform: F) -> Result<Vec<R>, ParseStallError>
    where
        F: FnMut(usize, &Attributes, String) -> R,
    {
        let chain = mem::take(&mut self.chain);

        extract_with(&self.input, &chain, mode, transform)
    }

    /// Returns the markup of every match, including the matched element's tags.
    #[inline]
    pub fn outer_html(&mut self) -> Result<Vec<String>, ParseStallError> {
        self.run(&OutputMode::Outer, |_, _, html| html)
    }

    /// Returns the markup nested in every matched element.
    #[inline]
    pub fn inner_html(&mut self) -> Result<Vec<String>, ParseStallError> {
        self.run(&OutputMode::Inner, |_, _, html| html)
    }

    #[inline]
    pub fn outer_html_with<F, R>(&mut self, transform: F) -> Result<Vec<R>, ParseStallError>
    where
        F: FnMut(usize, &Attributes, String) -> R,
    {
        self.run(&OutputMode::Outer, transform)
    }

    #[inline]
    pub fn inner_html_with<F, R>(&mut self, transform: F) -> Result<Vec<R>, ParseStallError>
    where
        F: FnMut(usize, &Attributes, String) -> R,
    {
        self.run(&OutputMode::Inner, transform)
    }

    /// Returns the value of the `name` attribute of every matched element
    /// that has one.
    #[inline]
    pub fn attr_values(&mut self, name: &str) -> Result<Vec<String>, ParseStallError> {
        self.run(&OutputMode::attribute(name), |_, _, value| value)
    }

    /// Returns the text nested in every matched element.
    #[inline]
    pub fn texts(&mut self) -> Result<Vec<String>, ParseStallError> {
        self.run(&OutputMode::Text, |_, _, text| text)
    }

    #[inline]
    pub fn texts_with<F, R>(&mut self, transform: F) -> Result<Vec<R>, ParseStallError>
    where
        F: FnMut(usize, &Attributes, String) -> R,
    {
        self.run(&OutputMode::Text, transform)
    }

    /// Returns the text nested in the first matched element.
    pub fn first_text(&mut self) -> Result<Option<String>, ParseStallError> {
        Ok(self.texts()?.into_iter().next())
    }
}
