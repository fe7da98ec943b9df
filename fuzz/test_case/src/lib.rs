use encoding_rs::*;
use html_extractor::{extract, AsciiCompatibleEncoding, Extractor, OutputMode, Settings};

static ASCII_COMPATIBLE_ENCODINGS: [&Encoding; 12] = [
    EUC_JP,
    EUC_KR,
    GB18030,
    ISO_8859_2,
    ISO_8859_5,
    KOI8_R,
    SHIFT_JIS,
    UTF_8,
    WINDOWS_1250,
    WINDOWS_1251,
    WINDOWS_1252,
    X_USER_DEFINED,
];

static TOKENS: &[&str] = &[
    "*",
    "^*",
    "p",
    "^html",
    ">body",
    ">div",
    "div",
    "li",
    ">a",
    "^DIV",
    "@id=myid",
    "@class=warning",
    "@@class=^w",
    "@@foo=(",
    "@",
    ">",
    "^",
    "@=x",
];

fn get_byte(data: &mut &[u8]) -> u8 {
    let Some((first, rest)) = (*data).split_at_checked(1) else {
        return 1;
    };
    *data = rest;
    first[0]
}

fn get_mode(byte: u8) -> OutputMode {
    match byte % 5 {
        0 => OutputMode::Outer,
        1 => OutputMode::Inner,
        2 => OutputMode::Text,
        3 => OutputMode::attribute("class"),
        _ => OutputMode::attribute("href"),
    }
}

pub fn run_extractor(mut data: &[u8]) {
    let settings = get_byte(&mut data);

    let encoding =
        ASCII_COMPATIBLE_ENCODINGS[(settings as usize / 5) % ASCII_COMPATIBLE_ENCODINGS.len()];

    let tokens: Vec<_> = (0..get_byte(&mut data) % 5)
        .map(|_| TOKENS[get_byte(&mut data) as usize % TOKENS.len()])
        .collect();

    let mode = get_mode(get_byte(&mut data));

    let settings = Settings {
        encoding: AsciiCompatibleEncoding::new(encoding).unwrap(),
    };

    let mut extractor = Extractor::from_bytes(data, &settings);

    extractor.tokens(&tokens);

    let input = extractor.input();

    if let Err(err) = extract(input, extractor.chain(), &mode) {
        assert!(err.offset < input.len());
        assert_eq!(err.remainder, input[err.offset..]);
    }
}
