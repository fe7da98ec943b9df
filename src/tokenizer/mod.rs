//! Single-pass markup tokenizer.
//!
//! The tokenizer walks the input left to right, recognizing one construct per
//! step: a comment, a declaration (doctype), a raw text element (`script` and
//! `style`), an end tag, a start tag or a run of text up to the next `<`. It
//! maintains a stack of open tags and applies HTML's implicit closing rules, so
//! every emitted start event of a non-self-closing tag is eventually paired with
//! exactly one end event.
//!
//! A step that recognizes nothing and consumes nothing is fatal, see
//! [`ParseStallError`].

mod attributes;
mod event;
mod open_tag_stack;
mod raw_content;
mod tag_syntax;

use self::open_tag_stack::OpenTagStack;
use self::raw_content::{raw_text_kind, scan_raw_block};
use self::tag_syntax::{scan_end_tag, scan_start_tag};
use crate::errors::ParseStallError;
use crate::html::TagClass;
use memchr::{memchr, memmem};
use std::borrow::Cow;

pub use self::attributes::{Attribute, Attributes};
pub use self::event::{EndTag, Event, EventSink, RawTextKind, StartTag};

#[inline]
fn lowercase(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|ch| ch.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

fn emit<S: EventSink>(sink: &mut S, event: Event<'_>) {
    trace!(@event &event);
    sink.handle_event(event);
}

fn emit_end_tag<S: EventSink>(sink: &mut S, name: String) {
    emit(sink, Event::EndTag(EndTag::new(Cow::Owned(name))));
}

pub struct Tokenizer<'i> {
    input: &'i str,
    pos: usize,
    open_tags: OpenTagStack,
}

impl<'i> Tokenizer<'i> {
    pub fn new(input: &'i str) -> Self {
        Tokenizer {
            input,
            pos: 0,
            open_tags: OpenTagStack::default(),
        }
    }

    /// Tokenizes the whole input, feeding the events to the sink.
    ///
    /// Once the input is exhausted end events are emitted for all the tags
    /// that are still open, innermost first.
    pub fn run<S: EventSink>(mut self, sink: &mut S) -> Result<(), ParseStallError> {
        while self.pos < self.input.len() {
            let consumed = self.step(sink);

            if consumed == 0 {
                return Err(ParseStallError {
                    offset: self.pos,
                    remainder: self.input[self.pos..].to_owned(),
                });
            }

            self.pos += consumed;
        }

        self.open_tags.pop_all(|name| emit_end_tag(sink, name));

        Ok(())
    }

    /// Performs a single step and returns the number of consumed bytes.
    fn step<S: EventSink>(&mut self, sink: &mut S) -> usize {
        let input = self.input;
        let rest = &input[self.pos..];

        let consumed = if rest.starts_with("<!--") {
            Self::comment(rest, sink)
        } else if rest.starts_with("<!") {
            Self::doctype(rest, sink)
        } else if let Some(kind) = raw_text_kind(rest) {
            Self::raw_block(rest, kind, sink)
        } else if rest.starts_with("</") {
            self.end_tag(rest, sink)
        } else if rest.starts_with('<') {
            self.start_tag(rest, sink)
        } else {
            None
        };

        consumed.unwrap_or_else(|| Self::text(rest, sink))
    }

    fn comment<S: EventSink>(rest: &'i str, sink: &mut S) -> Option<usize> {
        let end = memmem::find(&rest.as_bytes()[2..], b"-->")? + 2;

        // NOTE: in `<!-->` and `<!--->` the closing `-->` overlaps the
        // opening `<!--`, so the content is empty.
        emit(sink, Event::Comment(&rest[4..end.max(4)]));

        Some(end + 3)
    }

    fn doctype<S: EventSink>(rest: &'i str, sink: &mut S) -> Option<usize> {
        let gt = memchr(b'>', rest.as_bytes())?;

        emit(sink, Event::Doctype(&rest[2..gt]));

        Some(gt + 1)
    }

    fn raw_block<S: EventSink>(rest: &'i str, kind: RawTextKind, sink: &mut S) -> Option<usize> {
        let block = scan_raw_block(rest, kind)?;

        emit(
            sink,
            Event::RawBlock {
                kind: block.kind,
                content: block.content,
            },
        );

        Some(block.len)
    }

    fn end_tag<S: EventSink>(&mut self, rest: &'i str, sink: &mut S) -> Option<usize> {
        let tag = scan_end_tag(rest)?;

        self.open_tags
            .pop_up_to(&lowercase(tag.name), |name| emit_end_tag(sink, name));

        Some(tag.len)
    }

    fn start_tag<S: EventSink>(&mut self, rest: &'i str, sink: &mut S) -> Option<usize> {
        let tag = scan_start_tag(rest)?;
        let name = lowercase(tag.name);
        let class = TagClass::of(&name);
        let self_closing = tag.self_closing || class.contains(TagClass::VOID);

        self.open_tags
            .close_implied_by(&name, class, |name| emit_end_tag(sink, name));

        self.open_tags.try_push(&name, class, self_closing);

        emit(
            sink,
            Event::StartTag(StartTag::new(name, tag.attributes, self_closing)),
        );

        Some(tag.len)
    }

    fn text<S: EventSink>(rest: &'i str, sink: &mut S) -> usize {
        let len = memchr(b'<', rest.as_bytes()).unwrap_or(rest.len());

        if len > 0 {
            emit(sink, Event::Text(&rest[..len]));
        }

        len
    }
}

/// Tokenizes `input` feeding the events to `sink`.
///
/// # Example
/// ```
/// use html_extractor::{tokenize, Event};
///
/// let mut names = Vec::new();
///
/// tokenize("<span>text<div>x</div>", &mut |event: Event<'_>| match event {
///     Event::StartTag(tag) => names.push(format!("+{}", tag.name())),
///     Event::EndTag(tag) => names.push(format!("-{}", tag.name())),
///     _ => (),
/// })
/// .unwrap();
///
/// assert_eq!(names, ["+span", "-span", "+div", "-div"]);
/// ```
#[inline]
pub fn tokenize<S: EventSink>(input: &str, sink: &mut S) -> Result<(), ParseStallError> {
    Tokenizer::new(input).run(sink)
}
