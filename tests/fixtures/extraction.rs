use crate::harness::extraction_tests::{get_test_cases, Expectation, Mode, TestCase};
use crate::harness::ASCII_COMPATIBLE_ENCODINGS;
use html_extractor::{
    extract, AsciiCompatibleEncoding, Extractor, OutputMode, SelectorChain, Settings,
};

fn run(test: &TestCase) {
    let chain = SelectorChain::compile(&test.tokens);
    let actual = extract(&test.input, &chain, &OutputMode::from(&test.mode));

    match (&test.expected, actual) {
        (Expectation::Results(expected), Ok(actual)) => {
            assert_eq!(&actual, expected, "{}", test.description);
        }
        (Expectation::StallAt(offset), Err(err)) => {
            assert_eq!(err.offset, *offset, "{}", test.description);
            assert_eq!(err.remainder, test.input[*offset..], "{}", test.description);
        }
        (expected, actual) => {
            panic!(
                "{}\nexpected: {:?}\nactual: {:?}",
                test.description, expected, actual
            );
        }
    }
}

fn run_with_byte_input(test: &TestCase) {
    let Expectation::Results(expected) = &test.expected else {
        return;
    };

    for encoding in ASCII_COMPATIBLE_ENCODINGS {
        let (bytes, _, had_unmappable) = encoding.encode(&test.input);

        if had_unmappable {
            continue;
        }

        let settings = Settings {
            encoding: AsciiCompatibleEncoding::new(encoding).unwrap(),
        };

        let actual = Extractor::from_bytes(&bytes, &settings)
            .tokens(&test.tokens)
            .extract_mode(&test.mode);

        assert_eq!(
            &actual,
            expected,
            "{} - Encoding: {}",
            test.description,
            encoding.name()
        );
    }
}

trait ExtractMode {
    fn extract_mode(&mut self, mode: &Mode) -> Vec<String>;
}

impl ExtractMode for Extractor<'_> {
    fn extract_mode(&mut self, mode: &Mode) -> Vec<String> {
        match mode {
            Mode::Outer => self.outer_html(),
            Mode::Inner => self.inner_html(),
            Mode::Text => self.texts(),
            Mode::Attribute(name) => self.attr_values(name),
        }
        .unwrap()
    }
}

#[test]
fn extraction_cases() {
    let test_cases = get_test_cases("extraction/*.json");

    assert!(!test_cases.is_empty());

    for test in &test_cases {
        run(test);
    }
}

#[test]
fn extraction_cases_with_byte_input() {
    for test in &get_test_cases("extraction/*.json") {
        run_with_byte_input(test);
    }
}
