use crate::harness::{events, TestEvent};
use html_extractor::{ExtractExt, Extractor};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// NOTE: none of these names take part in implicit closing, so any nesting of
// them is well-formed.
const CONTAINERS: &[&str] = &["section", "article", "header", "footer", "figure", "x_item"];
const ATTR_NAMES: &[&str] = &["id", "class", "data-role", "title"];
const ATTR_VALUES: &[&str] = &["a", "b c", "it's", r#"say "hi""#, r#"it's"x""#, ""];

fn attributes(rng: &mut StdRng) -> String {
    let count = rng.gen_range(0..3);

    ATTR_NAMES
        .iter()
        .take(count)
        .map(|name| {
            let value = ATTR_VALUES[rng.gen_range(0..ATTR_VALUES.len())];

            match (value.contains('"'), value.contains('\'')) {
                (true, true) => format!(" {name}={value}"),
                (true, false) => format!(" {name}='{value}'"),
                _ => format!(" {name}=\"{value}\""),
            }
        })
        .join("")
}

fn element(rng: &mut StdRng, depth: usize, out: &mut String) {
    let name = CONTAINERS[rng.gen_range(0..CONTAINERS.len())];
    let attrs = attributes(rng);

    out.push_str(&format!("<{name}{attrs}>"));

    for _ in 0..rng.gen_range(0..4) {
        match rng.gen_range(0..4) {
            0 if depth < 5 => element(rng, depth + 1, out),
            1 => out.push_str("<br>"),
            2 => out.push_str(r#"<img src="i.png" alt="">"#),
            _ => out.push_str("text"),
        }
    }

    out.push_str(&format!("</{name}>"));
}

fn fragment(rng: &mut StdRng) -> String {
    let mut out = String::from("<main>");

    element(rng, 0, &mut out);
    out.push_str("</main>");

    out
}

fn element_events(fragment: &str) -> Vec<TestEvent> {
    events(fragment)
        .into_iter()
        .skip(1)
        .take_while(|e| *e != TestEvent::End("main".into()))
        .collect()
}

#[test]
fn outer_markup_preserves_structure() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let source = fragment(&mut rng);
        let extracted = source.extract_outer(["^main", ">*"]).unwrap();

        assert_eq!(extracted.len(), 1, "{source}");
        assert_eq!(events(&extracted[0]), element_events(&source), "{source}");
    }
}

#[test]
fn inner_markup_is_outer_markup_without_own_tags() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let source = fragment(&mut rng);
        let mut extractor = Extractor::new(&source);

        let outer = extractor.anchor("main").child("*").outer_html().unwrap();
        let inner = extractor.anchor("main").child("*").inner_html().unwrap();

        let outer_events = events(&outer[0]);

        assert_eq!(
            events(&inner[0]),
            outer_events[1..outer_events.len() - 1],
            "{source}"
        );
    }
}
