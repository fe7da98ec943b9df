use crate::errors::ParseStallError;
use crate::tokenizer::{tokenize, Event, RawTextKind};

pub const ARTICLE: &str = concat!(
    "<!DOCTYPE html><html><head><title>Test</title></head><body>",
    "<h1>Title</h1>",
    r#"<ul class="items"><li data-id="1">One</li><li data-id="x">Two</li><li data-id="3">Three</li></ul>"#,
    r#"<p>See <a href="/first">first</a> and <a href="/second">second</a>.</p>"#,
    "</body></html>"
);

/// Owned counterpart of [`Event`] for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestEvent {
    StartTag {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    EndTag(String),
    Text(String),
    Comment(String),
    Doctype(String),
    RawBlock(RawTextKind, String),
}

impl TestEvent {
    fn start_tag(name: &str, attributes: &[(&str, &str)], self_closing: bool) -> Self {
        TestEvent::StartTag {
            name: name.to_owned(),
            attributes: attributes
                .iter()
                .map(|(n, v)| ((*n).to_owned(), (*v).to_owned()))
                .collect(),
            self_closing,
        }
    }

    pub fn start(name: &str, attributes: &[(&str, &str)]) -> Self {
        Self::start_tag(name, attributes, false)
    }

    pub fn self_closing(name: &str, attributes: &[(&str, &str)]) -> Self {
        Self::start_tag(name, attributes, true)
    }

    pub fn end(name: &str) -> Self {
        TestEvent::EndTag(name.to_owned())
    }

    pub fn text(text: &str) -> Self {
        TestEvent::Text(text.to_owned())
    }

    pub fn comment(text: &str) -> Self {
        TestEvent::Comment(text.to_owned())
    }

    pub fn doctype(text: &str) -> Self {
        TestEvent::Doctype(text.to_owned())
    }

    pub fn raw(kind: RawTextKind, content: &str) -> Self {
        TestEvent::RawBlock(kind, content.to_owned())
    }
}

impl From<Event<'_>> for TestEvent {
    fn from(event: Event<'_>) -> Self {
        match event {
            Event::StartTag(tag) => TestEvent::StartTag {
                name: tag.name().to_owned(),
                attributes: tag
                    .attributes()
                    .iter()
                    .map(|a| (a.name().to_owned(), a.value().to_owned()))
                    .collect(),
                self_closing: tag.self_closing(),
            },
            Event::EndTag(tag) => TestEvent::EndTag(tag.name().to_owned()),
            Event::Text(text) => TestEvent::Text(text.to_owned()),
            Event::Comment(text) => TestEvent::Comment(text.to_owned()),
            Event::Doctype(text) => TestEvent::Doctype(text.to_owned()),
            Event::RawBlock { kind, content } => TestEvent::RawBlock(kind, content.into_owned()),
        }
    }
}

pub fn events(input: &str) -> Result<Vec<TestEvent>, ParseStallError> {
    let mut events = Vec::new();

    tokenize(input, &mut |event: Event<'_>| events.push(TestEvent::from(event)))?;

    Ok(events)
}
