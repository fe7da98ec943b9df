use crate::harness::{events, TestEvent};
use html_extractor::*;
use static_assertions::assert_impl_all;
use std::error::Error;

assert_impl_all!(Extractor<'static>: Send, Sync, Clone);
assert_impl_all!(SelectorChain: Send, Sync, Clone, Default);
assert_impl_all!(ParseStallError: Error, Send, Sync, Clone);
assert_impl_all!(EncodingError: Error, Send, Sync, Copy);
assert_impl_all!(Settings: Send, Sync, Default);

fn start(name: &str) -> TestEvent {
    TestEvent::Start {
        name: name.into(),
        attributes: vec![],
        self_closing: false,
    }
}

#[test]
fn inline_element_is_closed_before_block_element() {
    assert_eq!(
        events("<span>text<div>x</div>"),
        [
            start("span"),
            TestEvent::Text("text".into()),
            TestEvent::End("span".into()),
            start("div"),
            TestEvent::Text("x".into()),
            TestEvent::End("div".into()),
        ]
    );
}

#[test]
fn void_elements_never_get_end_events() {
    let events = events("<p>a<br>b<br/>c<hr></br></p>");

    assert!(!events
        .iter()
        .any(|e| matches!(e, TestEvent::End(name) if name == "br" || name == "hr")));

    assert_eq!(events.last(), Some(&TestEvent::End("p".into())));
}

#[test]
fn boolean_attributes() {
    let events = events("<input disabled data-flag>");

    assert_eq!(
        events,
        [TestEvent::Start {
            name: "input".into(),
            attributes: vec![
                ("disabled".into(), "disabled".into()),
                ("data-flag".into(), "".into())
            ],
            self_closing: true,
        }]
    );
}

#[test]
fn article_paragraphs() {
    let html = r#"<div id="a"><p>Hello</p><p>World</p></div>"#;
    let chain = SelectorChain::compile(["^div", ">p"]);

    assert_eq!(
        extract(html, &chain, &OutputMode::Outer).unwrap(),
        ["<p>Hello</p>", "<p>World</p>"]
    );

    assert_eq!(
        extract(html, &chain, &OutputMode::Inner).unwrap(),
        ["Hello", "World"]
    );
}

#[test]
fn anchor_mismatch_stops_matching() {
    let html = "<section><div><p>x</p></div></section><div><p>y</p></div>";

    assert!(html.extract_inner(["^div", "p"]).unwrap().is_empty());
    assert_eq!(html.extract_inner(["^section", "p"]).unwrap(), ["x"]);
}

#[test]
fn direct_child_chain_of_same_names() {
    let chain = ["^div", ">div", ">span"];

    assert_eq!(
        "<div><div><span>1</span></div><div><span>2</span></div></div>"
            .extract_text(chain)
            .unwrap(),
        ["1", "2"]
    );

    assert!("<div><section><div><span>1</span></div></section></div>"
        .extract_text(chain)
        .unwrap()
        .is_empty());

    assert!("<div></div><div><span>1</span></div>"
        .extract_text(chain)
        .unwrap()
        .is_empty());
}

#[test]
fn regex_attribute_predicate() {
    let html = r#"<i class="foo-bar">1</i><i class="barfoo">2</i>"#;

    assert_eq!(html.extract_text(["@@class=^foo"]).unwrap(), ["1"]);
}

#[test]
fn stall_reports_remainder() {
    let err = "<p>1 <<2</p>".extract_text(["p"]).unwrap_err();

    assert_eq!(err.offset, 5);
    assert_eq!(err.remainder, "<<2</p>");
    assert!(err.to_string().contains("byte 5"));
}

#[test]
fn raw_event_access() {
    let mut comments = Vec::new();
    let mut raw = Vec::new();

    tokenize(
        "<!-- a --><style>p {}</style><!-- b -->",
        &mut |event: Event<'_>| match event {
            Event::Comment(text) => comments.push(text.trim().to_owned()),
            Event::RawBlock { kind, content } => raw.push((kind, content.into_owned())),
            _ => (),
        },
    )
    .unwrap();

    assert_eq!(comments, ["a", "b"]);
    assert_eq!(raw, [(RawTextKind::Style, "p {}".to_owned())]);
}
