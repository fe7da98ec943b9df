use super::{data_dir_path, for_each_test_file};
use html_extractor::OutputMode;
use serde_derive::Deserialize;
use serde_json::from_reader;
use std::fs;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Outer,
    Inner,
    Text,
    Attribute(String),
}

impl From<&Mode> for OutputMode {
    fn from(mode: &Mode) -> Self {
        match mode {
            Mode::Outer => OutputMode::Outer,
            Mode::Inner => OutputMode::Inner,
            Mode::Text => OutputMode::Text,
            Mode::Attribute(name) => OutputMode::attribute(name),
        }
    }
}

#[derive(Deserialize)]
struct TestData {
    description: String,
    #[serde(default)]
    input: Option<String>,
    #[serde(default)]
    src: Option<String>,
    tokens: Vec<String>,
    mode: Mode,
    #[serde(default)]
    expected: Vec<String>,
    #[serde(default)]
    stall_offset: Option<usize>,
}

#[derive(Deserialize)]
struct Suite {
    #[serde(default)]
    tests: Vec<TestData>,
}

#[derive(Debug)]
pub enum Expectation {
    Results(Vec<String>),
    StallAt(usize),
}

#[derive(Debug)]
pub struct TestCase {
    pub description: String,
    pub input: String,
    pub tokens: Vec<String>,
    pub mode: Mode,
    pub expected: Expectation,
}

pub fn get_test_cases(path: &str) -> Vec<TestCase> {
    let mut test_cases = Vec::new();
    let mut ignored_count = 0;

    for_each_test_file(path, &mut |file| {
        for test in from_reader::<_, Suite>(file).unwrap().tests {
            let input = match (test.input, test.src) {
                (Some(input), _) => input,
                (None, Some(src)) => fs::read_to_string(data_dir_path(&src)).unwrap(),
                (None, None) => {
                    ignore!(@info "Ignoring test without input: `{}`", test.description);
                    ignored_count += 1;
                    continue;
                }
            };

            let expected = match test.stall_offset {
                Some(offset) => Expectation::StallAt(offset),
                None => Expectation::Results(test.expected),
            };

            test_cases.push(TestCase {
                description: test.description,
                input,
                tokens: test.tokens,
                mode: test.mode,
                expected,
            });
        }
    });

    ignore!(@total "extraction", ignored_count);

    test_cases
}
