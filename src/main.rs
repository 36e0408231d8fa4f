//! hilite - configurable lexical highlighter CLI
//!
//! Reads source files, highlights them against a pattern catalog, and
//! writes one HTML page per input.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use hilite::{html, Highlighter, HighlightError, PatternCatalog, Result, Theme};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut definitions: Option<PathBuf> = None;
    let mut theme_path: Option<PathBuf> = None;
    let mut language: Option<String> = None;
    let mut output: Option<PathBuf> = None;
    let mut inputs: Vec<PathBuf> = Vec::new();
    let mut list_languages = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--list-languages" => list_languages = true,
            "--definitions" | "-d" => definitions = Some(PathBuf::from(next_value(&args, &mut i)?)),
            "--theme" | "-t" => theme_path = Some(PathBuf::from(next_value(&args, &mut i)?)),
            "--language" | "-l" => language = Some(next_value(&args, &mut i)?),
            "--output" | "-o" => output = Some(PathBuf::from(next_value(&args, &mut i)?)),
            arg if arg.starts_with('-') => {
                return Err(HighlightError::Usage(format!("unknown option: {arg}")));
            }
            arg => inputs.push(PathBuf::from(arg)),
        }
        i += 1;
    }

    let catalog = match &definitions {
        Some(path) => PatternCatalog::load(path)?,
        None => PatternCatalog::parse(&hilite::builtin::default_source()),
    };
    let highlighter = Highlighter::new(catalog);

    if list_languages {
        for name in highlighter.list_languages() {
            println!("{name}");
        }
        return Ok(());
    }

    if inputs.is_empty() {
        print_usage();
        return Err(HighlightError::Usage("no input files".to_string()));
    }
    if output.is_some() && inputs.len() > 1 {
        return Err(HighlightError::Usage(
            "--output requires a single input file".to_string(),
        ));
    }

    let theme = match &theme_path {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };

    for input in &inputs {
        let started = Instant::now();

        let text = fs::read_to_string(input)?;
        let language_id = match &language {
            Some(id) => id.clone(),
            None => highlighter
                .detect_language(input)
                .unwrap_or_default()
                .to_string(),
        };

        let body = highlighter.highlight(&language_id, &text);
        let page = html::wrap_document(&body, &theme);

        let out_path = match &output {
            Some(path) => path.clone(),
            None => input.with_extension("html"),
        };
        fs::write(&out_path, page)?;

        log::info!(
            "{} -> {} [{}] in {}ms",
            input.display(),
            out_path.display(),
            if language_id.is_empty() { "plain" } else { language_id.as_str() },
            started.elapsed().as_millis()
        );
    }

    Ok(())
}

/// Get the value following a flag, advancing the argument cursor
fn next_value(args: &[String], i: &mut usize) -> Result<String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| HighlightError::Usage(format!("missing value for {flag}")))
}

fn print_usage() {
    println!("hilite {} - configurable lexical highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: hilite [OPTIONS] FILE...");
    println!();
    println!("Writes FILE.html next to each input file.");
    println!();
    println!("Options:");
    println!("  -d, --definitions FILE  Pattern definition source (default: builtin)");
    println!("  -l, --language ID       Language identifier (default: from extension)");
    println!("  -t, --theme FILE        Theme file overriding the default styles");
    println!("  -o, --output FILE       Output path (single input only)");
    println!("      --list-languages    List defined languages and exit");
    println!("  -h, --help              Show this help message");
    println!("  -V, --version           Show version information");
}

fn print_version() {
    println!("hilite {}", env!("CARGO_PKG_VERSION"));
}
