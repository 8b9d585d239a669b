//! Simple CLI that reads article HTML from stdin and prints the section map
//! as JSON to stdout.
//!
//! Usage: `extract_stdin [URL] < page.html`. The URL only labels log output;
//! set `RUST_LOG=debug` to see pipeline progress.

use article_extract::{extract_with_options, Options};
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let mut html = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut html) {
        log::error!("failed to read stdin: {err}");
        std::process::exit(1);
    }

    let options = match std::env::args().nth(1) {
        Some(url) => Options::for_url(&url),
        None => Options::default(),
    };

    let json = match extract_with_options(&html, &options) {
        Ok(result) => result.to_json().unwrap_or_else(|_| "{}".to_string()),
        Err(err) => {
            log::warn!("{err}");
            "{}".to_string()
        }
    };

    println!("{json}");
}
