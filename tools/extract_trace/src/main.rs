use getopts::{Matches, Options};
use html_extractor::*;
use std::env::args;
use std::fs;

fn parse_options() -> Option<Matches> {
    let mut opts = Options::new();

    opts.optopt(
        "m",
        "mode",
        "Output mode",
        "-m (outer|inner|text|attr:NAME)",
    );

    opts.optopt("e", "encoding", "Input encoding label", "-e");
    opts.optflag("f", "file", "Treat INPUT as a path to an HTML file");
    opts.optflag("c", "chain", "Only print the compiled selector chain");
    opts.optflag("h", "help", "Show this help");

    let matches = match opts.parse(args().skip(1)) {
        Ok(matches) => {
            if matches.free.is_empty() {
                eprintln!("Missing HTML input");
                None
            } else if matches.opt_present("h") {
                None
            } else {
                Some(matches)
            }
        }
        Err(e) => {
            eprintln!("{e}");
            None
        }
    };

    if matches.is_none() {
        eprintln!(
            "{}",
            opts.usage("Usage: cargo run -- [options] INPUT [TOKEN...]")
        );
    }

    matches
}

fn parse_mode(mode: Option<&str>) -> Result<OutputMode, String> {
    match mode {
        None | Some("outer") => Ok(OutputMode::Outer),
        Some("inner") => Ok(OutputMode::Inner),
        Some("text") => Ok(OutputMode::Text),
        Some(mode) => match mode.strip_prefix("attr:") {
            Some(name) if !name.is_empty() => Ok(OutputMode::attribute(name)),
            _ => Err(format!("Unknown output mode `{mode}`")),
        },
    }
}

fn main() {
    let Some(matches) = parse_options() else {
        return;
    };

    let (input, tokens) = matches.free.split_first().unwrap();
    let chain = SelectorChain::compile(tokens);

    if matches.opt_present("c") {
        println!("{chain:#?}");
        return;
    }

    let mode = match parse_mode(matches.opt_str("m").as_deref()) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let bytes = if matches.opt_present("f") {
        fs::read(input).unwrap()
    } else {
        input.clone().into_bytes()
    };

    let settings = match matches.opt_str("e") {
        Some(label) => Settings::from_encoding_label(&label).unwrap(),
        None => Settings::default(),
    };

    let html = settings.decode(&bytes);

    match extract(&html, &chain, &mode) {
        Ok(results) => {
            for (i, result) in results.iter().enumerate() {
                println!("#{i}: {result:?}");
            }
        }
        Err(e) => eprintln!("{e}"),
    }
}
