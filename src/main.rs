use std::env;
use std::process;

use anyhow::{Context, Result};

use csl_fixture_parser::{fixture_path_from_args, parse_fixture_file, usage};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let Some(path) = fixture_path_from_args(&args) else {
        println!("{}", usage(&args));
        process::exit(1);
    };

    let record = parse_fixture_file(path)
        .with_context(|| format!("Failed to process fixture: {}", path))?;

    let json = record
        .to_pretty_json()
        .context("Failed to render fixture record as JSON")?;
    println!("{}", json);

    Ok(())
}
