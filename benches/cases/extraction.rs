use criterion::Bencher;
use html_extractor::{extract, OutputMode, SelectorChain};
use std::hint::black_box;

fn create_runner(
    tokens: &'static [&'static str],
    mode: OutputMode,
) -> impl FnMut(&mut Bencher<'_>, &String) {
    let chain = SelectorChain::compile(tokens);

    move |b, input: &String| b.iter(|| black_box(extract(input, &chain, &mode).unwrap()))
}

define_group!(
    "Extraction",
    [
        (
            "Outer markup of every list item",
            create_runner(&["ul", ">li"], OutputMode::Outer)
        ),
        (
            "Text of anchored paragraphs",
            create_runner(&["^html", ">body", "div", ">p"], OutputMode::Text)
        ),
        (
            "Link targets by attribute pattern",
            create_runner(&["a", "@@href=^/item/"], OutputMode::attribute("href"))
        ),
        (
            // NOTE: never matches, measures the scanning overhead alone.
            "Unmatched chain",
            create_runner(&["section", ">nav"], OutputMode::Inner)
        )
    ]
);
