use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use minus::Pager;
use sqldiff::areas::console::{Console, RenderSettings};
use sqldiff::artifacts::core::{PagerWriter, logging, should_page};
use sqldiff::artifacts::diff::DiffOptions;
use sqldiff::artifacts::diff::merger::{DEFAULT_LOOKAHEAD, DEFAULT_SIMILARITY_THRESHOLD};
use sqldiff::artifacts::lines::StatusFilter;
use sqldiff::commands::diff::{BaselineSource, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sqldiff",
    version = "0.1.0",
    about = "Incremental line diff for streamed SQL",
    long_about = "Diffs successive full versions of a SQL statement line by line, \
    reporting unchanged, added, removed and modified lines with ids that stay stable \
    across versions.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v debug, -vv trace)")]
    verbose: u8,
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto, help = "When to color output")]
    color: ColorChoice,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Args, Debug, Clone)]
struct EngineArgs {
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD, value_parser = parse_threshold, help = "Similarity at which a removed and an added line count as one modified line")]
    threshold: f64,
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD, help = "How many lines ahead the merger looks for a better pairing")]
    lookahead: usize,
    #[arg(long, help = "Show line ids in text output; JSON output always carries them")]
    ids: bool,
    #[arg(long, help = "Only print rows with these statuses, e.g. added,modified")]
    only: Option<StatusFilter>,
}

impl EngineArgs {
    fn options(&self) -> DiffOptions {
        DiffOptions::new(self.threshold, self.lookahead)
    }

    fn render(&self) -> RenderSettings {
        RenderSettings::new(self.ids, self.only.unwrap_or(StatusFilter::all()))
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Diff a baseline against the next full text",
        long_about = "This command diffs a baseline against the next full version of the text. \
        The baseline is either a JSON file saved by --save-baseline, a plain text file, or empty."
    )]
    Diff {
        #[arg(index = 1, help = "The next full text")]
        next: PathBuf,
        #[arg(long, conflicts_with = "previous", help = "A JSON baseline saved by a previous run")]
        baseline: Option<PathBuf>,
        #[arg(long, help = "A plain text previous version")]
        previous: Option<PathBuf>,
        #[arg(long, help = "Write the next baseline as JSON to this file")]
        save_baseline: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
        format: OutputFormat,
        #[command(flatten)]
        engine: EngineArgs,
    },
    #[command(
        name = "replay",
        about = "Replay successive versions of a text",
        long_about = "This command applies each file, in order, as the next full version of one \
        streamed text and prints the diff of every step."
    )]
    Replay {
        #[arg(index = 1, required = true, num_args = 1.., help = "The versions, oldest first")]
        versions: Vec<PathBuf>,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let threshold = s
        .parse::<f64>()
        .map_err(|e| format!("invalid threshold {s}: {e}"))?;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(format!("threshold must be within 0 and 1, got {threshold}"));
    }
    Ok(threshold)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    let pager = should_page().then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    match &cli.command {
        Commands::Diff {
            next,
            baseline,
            previous,
            save_baseline,
            format,
            engine,
        } => {
            let source = match (baseline, previous) {
                (Some(path), _) => BaselineSource::Json(path.clone()),
                (None, Some(path)) => BaselineSource::Text(path.clone()),
                (None, None) => BaselineSource::Empty,
            };
            let console = Console::new(writer, engine.options(), engine.render());

            console.diff(next, &source, save_baseline.as_deref(), *format)?
        }
        Commands::Replay { versions, engine } => {
            let console = Console::new(writer, engine.options(), engine.render());

            console.replay(versions)?
        }
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
