use anyhow::{Context, Result, bail};
use clap::Parser;
use latex2tast_config::Config;
use latex2tast_engine::{ParseError, parse_with_warnings};
use std::path::{Path, PathBuf};
use std::process;

mod output;

use output::Fields;

#[derive(Parser)]
#[command(name = "tex2tast")]
#[command(about = "Print the document tree of a LaTeX file as JSON")]
#[command(version)]
struct Args {
    /// Keep `range` and `loc` on every node
    #[arg(short, long)]
    location: bool,

    /// Keep `raw` on every node
    #[arg(short, long)]
    raw: bool,

    /// Print the tree on a single line
    #[arg(long)]
    compact: bool,

    /// LaTeX file to convert
    file: PathBuf,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            match err.downcast_ref::<ParseError>() {
                Some(parse_error) => eprintln!("{}", describe(&args.file, parse_error)),
                None => eprintln!("Error: {err:#}"),
            }
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::warn!("{e}. Using defaults.");
            Config::default()
        }
    };

    if !config.accepts(&args.file) {
        bail!(
            "{} is not a LaTeX file (add its extension to `extensions` in {})",
            args.file.display(),
            Config::config_path().display()
        );
    }

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let parsed = parse_with_warnings(&text)?;
    log::debug!(
        "{}: {} unknown constructs",
        args.file.display(),
        parsed.warnings.len()
    );

    let fields = Fields {
        location: args.location || config.location,
        raw: args.raw || config.raw,
    };
    let json = output::render(&parsed.document, fields, args.compact)
        .context("Failed to serialise the document tree")?;
    Ok(json)
}

/// `path:line:column: message`, the shape editors jump to.
fn describe(path: &Path, error: &ParseError) -> String {
    let (line, column) = error.position();
    format!("{}:{line}:{column}: {}", path.display(), error.message())
}
