use criterion::Bencher;
use html_extractor::{tokenize, Event};
use std::hint::black_box;

fn create_runner(
    keep: impl Fn(&Event<'_>) -> bool + Copy,
) -> impl FnMut(&mut Bencher<'_>, &String) {
    move |b, input: &String| {
        b.iter(|| {
            let mut count = 0usize;

            tokenize(input, &mut |event: Event<'_>| {
                if keep(&event) {
                    count += 1;
                    black_box(event);
                }
            })
            .unwrap();

            black_box(count)
        })
    }
}

define_group!(
    "Parsing",
    [
        (
            "Tag events",
            create_runner(|e| matches!(e, Event::StartTag(_) | Event::EndTag(_)))
        ),
        ("All events", create_runner(|_| true))
    ]
);
