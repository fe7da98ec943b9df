//! The match engine.
//!
//! The engine consumes tokenizer events and walks them against a compiled
//! [`SelectorChain`] in a single forward pass. Partial matches are tracked per
//! step. Once the last step matches, everything nested in the matched element
//! is captured verbatim (nested elements are never matched separately) until
//! the element is closed, at which point one result is produced.

mod output;
mod state;

use self::output::{write_end_tag, write_start_tag};
use self::state::{MatchState, Phase};
use crate::errors::ParseStallError;
use crate::selectors::SelectorChain;
use crate::tokenizer::{tokenize, Attributes, Event, EventSink, StartTag};
use std::borrow::Cow;
use std::mem;

pub use self::output::OutputMode;

pub struct MatchEngine<'c, F, R>
where
    F: FnMut(usize, &Attributes, String) -> R,
{
    chain: Cow<'c, SelectorChain>,
    mode: &'c OutputMode,
    state: MatchState,
    buffer: String,
    transform: F,
    results: Vec<R>,
}

impl<'c, F, R> MatchEngine<'c, F, R>
where
    F: FnMut(usize, &Attributes, String) -> R,
{
    /// Creates an engine that passes every finished occurrence through
    /// `transform` as `(occurrence_index, attributes, fragment)`.
    ///
    /// An empty chain matches every element.
    pub fn new(chain: &'c SelectorChain, mode: &'c OutputMode, transform: F) -> Self {
        let chain = if chain.is_empty() {
            Cow::Owned(SelectorChain::compile(["*"]))
        } else {
            Cow::Borrowed(chain)
        };

        MatchEngine {
            state: MatchState::new(chain.len()),
            chain,
            mode,
            buffer: String::new(),
            transform,
            results: Vec::new(),
        }
    }

    #[inline]
    pub fn into_results(self) -> Vec<R> {
        self.results
    }

    fn start_tag(&mut self, tag: &StartTag<'_>) {
        if self.state.check_anchor(&self.chain, tag.name()) {
            return;
        }

        self.state.enter();

        if self.state.is_capturing() {
            if self.mode.keeps_nested_tags() {
                write_start_tag(&mut self.buffer, tag);
            }
        } else if self.state.try_advance(&self.chain, tag) && self.mode.keeps_own_tags() {
            write_start_tag(&mut self.buffer, tag);
        }

        self.state.trace();

        if tag.self_closing() {
            self.end_tag(tag.name(), true);
        }
    }

    fn end_tag(&mut self, name: &str, self_closing: bool) {
        if self.state.phase() == Phase::Stopped {
            return;
        }

        if let Some((occurrence, attributes)) = self.state.close_current() {
            if self.mode.keeps_own_tags() && !self_closing {
                write_end_tag(&mut self.buffer, name);
            }

            self.finish_occurrence(occurrence, &attributes);
        } else if self.state.is_capturing() && self.mode.keeps_nested_tags() && !self_closing {
            write_end_tag(&mut self.buffer, name);
        }

        self.state.leave();
        self.state.trace();
    }

    fn finish_occurrence(&mut self, occurrence: usize, attributes: &Attributes) {
        let fragment = mem::take(&mut self.buffer);

        let fragment = match self.mode {
            OutputMode::Attribute(name) => match attributes.get(name) {
                Some(value) => value.to_owned(),
                None => return,
            },
            _ => fragment,
        };

        self.results
            .push((self.transform)(occurrence, attributes, fragment));
    }

    fn text(&mut self, text: &str) {
        if self.state.is_capturing() && self.mode.keeps_text() {
            self.buffer.push_str(text);
        }
    }
}

impl<F, R> EventSink for MatchEngine<'_, F, R>
where
    F: FnMut(usize, &Attributes, String) -> R,
{
    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::StartTag(tag) => self.start_tag(&tag),
            Event::EndTag(tag) => self.end_tag(tag.name(), false),
            Event::Text(text) => self.text(text),
            Event::RawBlock { content, .. } => self.text(&content),
            Event::Comment(_) | Event::Doctype(_) => (),
        }
    }
}

/// Runs `chain` over `input` in a single pass, returning one fragment per
/// completed match in document order.
///
/// # Example
/// ```
/// use html_extractor::{extract, OutputMode, SelectorChain};
///
/// let html = r#"<div id="a"><p>Hello</p><p>World</p></div>"#;
/// let chain = SelectorChain::compile(["^div", ">p"]);
///
/// assert_eq!(
///     extract(html, &chain, &OutputMode::Outer).unwrap(),
///     ["<p>Hello</p>", "<p>World</p>"]
/// );
///
/// assert_eq!(
///     extract(html, &chain, &OutputMode::Inner).unwrap(),
///     ["Hello", "World"]
/// );
/// ```
#[inline]
pub fn extract(
    input: &str,
    chain: &SelectorChain,
    mode: &OutputMode,
) -> Result<Vec<String>, ParseStallError> {
    extract_with(input, chain, mode, |_, _, fragment| fragment)
}

/// Like [`extract`], but passes every completed match through `transform`
/// as `(occurrence_index, attributes, fragment)`.
///
/// In [`OutputMode::Attribute`] the fragment is the attribute value.
pub fn extract_with<F, R>(
    input: &str,
    chain: &SelectorChain,
    mode: &OutputMode,
    transform: F,
) -> Result<Vec<R>, ParseStallError>
where
    F: FnMut(usize, &Attributes, String) -> R,
{
    let mut engine = MatchEngine::new(chain, mode, transform);

    tokenize(input, &mut engine)?;

    Ok(engine.into_results())
}
