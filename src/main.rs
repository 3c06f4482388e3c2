use anyhow::{bail, Context, Result};
use gitk_syntax::syntax::{detect_language, token_color, tokenize_line};
use gitk_syntax::LanguageId;
use serde_json::json;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut language_override: Option<LanguageId> = None;
    let mut with_colors = false;
    let mut path: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--language" => {
                let name = iter
                    .next()
                    .context("--language requires a value (e.g. --language rust)")?;
                language_override = Some(LanguageId::from_str(name)?);
            }
            "--colors" => with_colors = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other if other.starts_with('-') => bail!("unknown flag: {other}"),
            other => path = Some(other.to_string()),
        }
    }

    let Some(path) = path else {
        print_usage();
        bail!("missing input file");
    };

    let language = language_override.or_else(|| detect_language(&path));
    match language {
        Some(language) => debug!(%language, %path, "tokenizing"),
        None => warn!(%path, "no language detected, emitting plain text tokens"),
    }

    let content =
        std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in content.lines() {
        let tokens = tokenize_line(line, language);
        if with_colors {
            let annotated: Vec<_> = tokens
                .iter()
                .map(|t| {
                    json!({
                        "type": t.token_type.name(),
                        "value": t.value,
                        "color": token_color(t.token_type),
                    })
                })
                .collect();
            serde_json::to_writer(&mut out, &annotated)?;
        } else {
            serde_json::to_writer(&mut out, &tokens)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn print_usage() {
    eprintln!("usage: gitk-syntax [--language <name>] [--colors] <file>");
    eprintln!();
    eprintln!("Tokenizes each line of <file> and prints one JSON token array per line.");
    eprintln!("The language is detected from the file extension unless --language is given.");
}
