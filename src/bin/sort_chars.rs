// src/bin/sort_chars.rs

//! Demo driver: sort the characters of a string.
//!
//! ```text
//! sort_chars [options] <string>
//! ```

use anyhow::Result;
use argot::{ArgumentParser, OptionKind};

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("sort_chars");

    if let Err(err) = run(&args) {
        eprintln!("{program}: {err}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let mut parser = ArgumentParser::new();
    parser
        .add_positional("string")?
        .help("string whose characters will be sorted");
    parser
        .add_optional_with_flag("-i", "--invert", OptionKind::Flag)?
        .help("sort in descending order");
    parser
        .add_optional_with_flag("-r", "--repeat", OptionKind::Single)?
        .help("print the sorted string this many times");
    parser
        .add_optional_with_flag("-f", "--filter", OptionKind::Append)?
        .help("drop this character before sorting; may be repeated");
    parser.parse(args)?;

    let mut chars: Vec<char> = parser.arg::<String>("string")?.chars().collect();
    for filtered in parser.args::<char>("filter")? {
        chars.retain(|&c| c != filtered);
    }
    chars.sort_unstable();
    if parser.arg::<bool>("invert")? {
        chars.reverse();
    }

    let sorted: String = chars.into_iter().collect();
    for _ in 0..parser.arg_or::<u32>("repeat", 1)? {
        println!("{sorted}");
    }
    Ok(())
}
