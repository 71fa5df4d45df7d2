use anyhow::{Context, Result};
use clap::Parser;
use flags::{InputFormatFlag, OutputFormatFlag, Verbosity};
use report::MergeReport;
use std::io::{self, Write};
use std::path::PathBuf;
use thesaurus_align::{AlignConfig, AlignmentOrchestrator, MatchConfig};
use thesaurus_graph::write_file;

mod flags;
mod logging;
mod report;

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "thesaurus-merge")]
#[command(about = "Align two or more SKOS thesauri and merge them into one graph", long_about = None)]
#[command(version)]
struct Cli {
    /// Two or more input files
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// The output file
    #[arg(short, long)]
    output: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "xml")]
    format: OutputFormatFlag,

    /// Input format (default: guessed from each file extension)
    #[arg(long, value_enum)]
    input_format: Option<InputFormatFlag>,

    /// Verbosity and log destination
    #[arg(long, value_enum, default_value = "screen")]
    verbose: Verbosity,

    /// Log file used by the file, both and debug modes
    #[arg(long, default_value = "parserLog.txt")]
    log_file: PathBuf,

    /// Use stemming
    #[arg(short = 's')]
    stemming: bool,

    /// Remove diacritics and punctuation
    #[arg(short = 'r')]
    strip_diacritics: bool,

    /// Compare children (narrower terms)
    #[arg(short = 'c')]
    compare_children: bool,

    /// Compare parents (broader terms)
    #[arg(short = 'p')]
    compare_parents: bool,

    /// Map identical terms only
    #[arg(short = 'i')]
    identical_only: bool,

    /// Match multi-word terms by their sorted, stemmed words
    #[arg(short = 't')]
    term_signature: bool,

    /// TOML config file with [matching] and [labels] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preferred prefLabel language tag
    #[arg(long)]
    lang: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn match_flags(&self) -> MatchConfig {
        MatchConfig {
            stemming: self.stemming,
            strip_diacritics: self.strip_diacritics,
            compare_children: self.compare_children,
            compare_parents: self.compare_parents,
            identical_only: self.identical_only,
            term_signature: self.term_signature,
        }
    }

    /// Config file (if any) with the command-line switches on top
    fn align_config(&self) -> Result<AlignConfig> {
        let mut config = match &self.config {
            Some(path) => AlignConfig::load(path)?,
            None => AlignConfig::default(),
        };
        config.matching = config.matching.union(self.match_flags());
        if let Some(lang) = &self.lang {
            config.labels.language = Some(lang.clone());
        }
        Ok(config)
    }
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, &cli.log_file)?;

    let config = cli.align_config()?;
    log::debug!("Effective configuration: {config:?}");

    let orchestrator = AlignmentOrchestrator::new(config)?;
    let outcome = orchestrator.align_files(
        &cli.inputs,
        cli.input_format.map(InputFormatFlag::as_domain),
    )?;

    write_file(&outcome.merged, &cli.output, cli.format.as_domain())
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    let report = MergeReport::new(outcome.counters, &cli.output);
    if cli.json {
        print_stdout(&report.render_json()?)?;
    } else {
        print_stdout(&report.render_text())?;
    }
    Ok(())
}
