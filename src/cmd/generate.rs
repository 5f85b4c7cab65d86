//! Generate command CLI handler.

use csv_faker::config::{unescape_separator, OptionOverrides};
use csv_faker::error::record_count;
use csv_faker::job::{build_schema, parse_column, JobConfig};
use csv_faker::{GenerationSummary, RecordWriter};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_COUNT: usize = 100;

pub struct GenerateArgs {
    pub schema: Option<PathBuf>,
    pub columns: Vec<String>,
    pub count: Option<i64>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub delimiter: Option<String>,
    pub quote: Option<String>,
    pub escape: Option<String>,
    pub new_line: Option<String>,
    pub no_header: bool,
    pub progress: bool,
    pub background: bool,
    pub json: bool,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let job = match args.schema {
        Some(ref path) => JobConfig::load(path)?,
        None => JobConfig::default(),
    };

    let mut columns = job.columns.clone();
    for spec in &args.columns {
        columns.push(parse_column(spec)?);
    }
    if columns.is_empty() {
        anyhow::bail!("No columns given: use --schema or --column NAME:KIND");
    }

    let count = match args.count {
        Some(n) => record_count(n)?,
        None => job.record_count()?.unwrap_or(DEFAULT_COUNT),
    };

    // Seed precedence: flag, job file, random
    let seed = args.seed.or(job.seed).unwrap_or_else(rand::random);
    let mut schema = build_schema(&columns, seed)?;

    let cli_overrides = OptionOverrides {
        header: args.no_header.then_some(false),
        delimiter: args.delimiter.as_deref().map(unescape_separator),
        quote: args.quote.as_deref().map(unescape_separator),
        escape: args.escape.as_deref().map(unescape_separator),
        new_line: args.new_line.as_deref().map(unescape_separator),
        logging: Some(args.progress && !args.json),
    };
    let writer = RecordWriter::with_overrides(&job.options.clone().merge(cli_overrides));

    let summary = match args.output {
        Some(path) if args.background => {
            let handle = writer.generate(schema, count, &path);
            let spinner = if args.progress && !args.json {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                        .unwrap()
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
                );
                pb.set_message(format!("Writing {}...", path.display()));
                Some(pb)
            } else {
                None
            };

            while !handle.is_finished() {
                if let Some(ref pb) = spinner {
                    pb.tick();
                }
                std::thread::sleep(Duration::from_millis(100));
            }
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
            handle.wait()?
        }
        Some(path) => writer.generate_and_wait(&mut schema, count, &path)?,
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            writer.generate_to_stream(&mut schema, count, &mut out)?
        }
    };

    if args.json {
        print_json(&summary)?;
    }

    Ok(())
}

fn print_json(summary: &GenerationSummary) -> anyhow::Result<()> {
    eprintln!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
