use avl_collections::word_count::count_words;
use log::{error, info, LevelFilter};
use simplelog::{Config, SimpleLogger, TermLogger};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

const USAGE: &str = "usage: word-count [-v | -q] [FILE]";

fn init_logger(level: LevelFilter) {
    if TermLogger::init(level, Config::default()).is_err() {
        let _ = SimpleLogger::init(level, Config::default());
    }
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        },
    }
}

fn main() {
    let mut level = LevelFilter::Warn;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-v" => level = LevelFilter::Debug,
            "-q" => level = LevelFilter::Off,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            },
            _ if path.is_none() => path = Some(arg.clone()),
            _ => {
                eprintln!("{}", USAGE);
                process::exit(2);
            },
        }
    }
    init_logger(level);

    let text = match read_input(path.as_ref().map(String::as_str)) {
        Ok(text) => text,
        Err(err) => {
            error!("failed to read input: {}", err);
            process::exit(1);
        },
    };

    let counts = count_words(&text);
    info!("{} distinct words, tree height {}", counts.len(), counts.height());
    for (word, count) in &counts {
        println!("{}: {}", word, count);
    }
}
