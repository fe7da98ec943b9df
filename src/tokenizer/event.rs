use super::Attributes;
use std::borrow::Cow;

/// Kind of an element whose content is passed through uninterpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RawTextKind {
    Script,
    Style,
}

impl RawTextKind {
    #[inline]
    pub fn tag_name(self) -> &'static str {
        match self {
            RawTextKind::Script => "script",
            RawTextKind::Style => "style",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag<'i> {
    name: Cow<'i, str>,
    attributes: Attributes,
    self_closing: bool,
}

impl<'i> StartTag<'i> {
    #[inline]
    pub(crate) fn new(name: Cow<'i, str>, attributes: Attributes, self_closing: bool) -> Self {
        StartTag {
            name,
            attributes,
            self_closing,
        }
    }

    /// Lower-cased tag name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Set for void elements and for tags written with a trailing `/>`.
    /// Self-closing tags never get a matching [`EndTag`].
    #[inline]
    pub fn self_closing(&self) -> bool {
        self.self_closing
    }

    #[inline]
    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndTag<'i> {
    name: Cow<'i, str>,
}

impl<'i> EndTag<'i> {
    #[inline]
    pub(crate) fn new(name: Cow<'i, str>) -> Self {
        EndTag { name }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A structural unit produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'i> {
    StartTag(StartTag<'i>),
    EndTag(EndTag<'i>),
    Text(&'i str),
    Comment(&'i str),
    Doctype(&'i str),
    RawBlock {
        kind: RawTextKind,
        content: Cow<'i, str>,
    },
}

/// Consumer of tokenizer events.
pub trait EventSink {
    fn handle_event(&mut self, event: Event<'_>);
}

impl<F: FnMut(Event<'_>)> EventSink for F {
    #[inline]
    fn handle_event(&mut self, event: Event<'_>) {
        self(event);
    }
}
