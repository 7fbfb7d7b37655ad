//! CLI tool for building slide decks from slide scripts.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use deck_core::{builtin_talk_names, Deck, OutlineFormatter, PresentationRoot};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Build slide decks from JSON slide scripts.
#[derive(Parser, Debug)]
#[command(name = "deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Slide script file(s) (.json)
    input: Vec<PathBuf>,

    /// Build a bundled talk instead of (or in addition to) script files
    #[arg(short, long)]
    talk: Vec<String>,

    /// List the bundled talks and exit
    #[arg(long)]
    list: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Outline)]
    format: OutputFormat,

    /// Output directory (default: same as input file, or the current directory for bundled talks)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Include presenter notes in the outline
    #[arg(short, long)]
    notes: bool,

    /// Do not number slides in the outline
    #[arg(long)]
    no_numbers: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain-text outline, one paragraph per slide
    Outline,
    /// The built deck as pretty-printed JSON
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Outline => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Where a deck comes from.
enum Source<'a> {
    File(&'a Path),
    Builtin(&'a str),
}

impl Source<'_> {
    fn describe(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Builtin(name) => format!("bundled talk '{}'", name),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.list {
        for name in builtin_talk_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if args.input.is_empty() && args.talk.is_empty() {
        anyhow::bail!("Nothing to build: pass a slide script or --talk <NAME> (see --list)");
    }

    let formatter = OutlineFormatter::new()
        .with_numbers(!args.no_numbers)
        .with_notes(args.notes);

    let sources = args
        .input
        .iter()
        .map(|p| Source::File(p.as_path()))
        .chain(args.talk.iter().map(|t| Source::Builtin(t.as_str())));

    let mut failures = 0;
    for source in sources {
        log::info!("Processing: {}", source.describe());

        match process_source(&source, &args, &formatter) {
            Ok(output) => {
                if args.print {
                    print!("{}", output);
                } else {
                    let output_path = get_output_path(&source, args.output.as_ref(), args.format)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("Error processing {}: {:#}", source.describe(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} deck(s) failed to build", failures);
    }

    Ok(())
}

/// Build one deck and render it in the requested format.
fn process_source(source: &Source, args: &Args, formatter: &OutlineFormatter) -> Result<String> {
    let root = match source {
        Source::File(path) => PresentationRoot::from_path(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        Source::Builtin(name) => PresentationRoot::builtin(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown talk '{}' (see --list)", name))??,
    };

    let deck = root.present()?;

    if args.verbose {
        eprintln!("  Built {} slides", deck.len());
    }

    render(&deck, args.format, formatter)
}

fn render(deck: &Deck, format: OutputFormat, formatter: &OutlineFormatter) -> Result<String> {
    Ok(match format {
        OutputFormat::Outline => formatter.format_with_newline(deck),
        OutputFormat::Json => format!("{}\n", deck.to_json_pretty()?),
    })
}

/// Determine the output path for a built deck.
fn get_output_path(
    source: &Source,
    output_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let (stem, parent) = match source {
        Source::File(path) => (
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("deck")
                .to_string(),
            path.parent().map(Path::to_path_buf),
        ),
        Source::Builtin(name) => (name.to_string(), None),
    };

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => match parent {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
