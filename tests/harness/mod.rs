use encoding_rs::*;
use html_extractor::{tokenize, Event, RawTextKind};
use std::fs::File;
use std::io::BufReader;

macro_rules! ignore {
    (@info $($args:expr),+) => {
        if std::env::var("IGNORES_VERBOSE").is_ok() {
            println!($($args),+);
        }
    };

    (@total $type:expr, $count:expr) => {
        println!("Ignoring {} {} tests, run with `IGNORES_VERBOSE=1` to get more info.", $count, $type);
    };
}

pub mod extraction_tests;

pub static ASCII_COMPATIBLE_ENCODINGS: [&Encoding; 8] = [
    UTF_8,
    WINDOWS_1251,
    WINDOWS_1252,
    KOI8_R,
    ISO_8859_5,
    SHIFT_JIS,
    GB18030,
    EUC_KR,
];

pub fn data_dir_path(path: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), path)
}

pub fn for_each_test_file(path: &str, handler: &mut dyn FnMut(BufReader<File>)) {
    glob::glob(&data_dir_path(path)).unwrap().for_each(|path| {
        handler(BufReader::new(File::open(path.unwrap()).unwrap()));
    });
}

/// Owned, comparable form of a tokenizer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestEvent {
    Start {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    End(String),
    Text(String),
    Comment(String),
    Doctype(String),
    Raw(RawTextKind, String),
}

pub fn events(input: &str) -> Vec<TestEvent> {
    let mut events = Vec::new();

    tokenize(input, &mut |event: Event<'_>| {
        events.push(match event {
            Event::StartTag(tag) => TestEvent::Start {
                name: tag.name().to_owned(),
                attributes: tag
                    .attributes()
                    .iter()
                    .map(|a| (a.name().to_owned(), a.value().to_owned()))
                    .collect(),
                self_closing: tag.self_closing(),
            },
            Event::EndTag(tag) => TestEvent::End(tag.name().to_owned()),
            Event::Text(text) => TestEvent::Text(text.to_owned()),
            Event::Comment(text) => TestEvent::Comment(text.to_owned()),
            Event::Doctype(text) => TestEvent::Doctype(text.to_owned()),
            Event::RawBlock { kind, content } => TestEvent::Raw(kind, content.into_owned()),
        })
    })
    .unwrap();

    events
}
