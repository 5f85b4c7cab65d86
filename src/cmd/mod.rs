mod generate;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate as generate_completions, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv-faker")]
#[command(version)]
#[command(about = "Generate synthetic CSV data from field generator schemas", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate records as CSV
    Generate {
        /// YAML job file with columns, count, seed and options
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Column as NAME:KIND (repeatable), appended after job file columns.
        /// Kinds: sequence[=start], constant=value, integer=min..max, uuid,
        /// name, first_name, last_name, email, username, password[=length],
        /// phone, city, company, word, sentence, date, datetime, boolean
        #[arg(short, long = "column", value_name = "NAME:KIND")]
        columns: Vec<String>,

        /// Number of records (overrides the job file)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Output file (default: stdout). .gz, .bz2, .xz and .zst are compressed
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Value separator (escapes like \t are expanded)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// String wrapped around every value
        #[arg(long)]
        quote: Option<String>,

        /// String placed before quotes found inside values
        #[arg(long)]
        escape: Option<String>,

        /// Line terminator (escapes like \r\n are expanded)
        #[arg(long)]
        new_line: Option<String>,

        /// Skip the header line
        #[arg(long)]
        no_header: bool,

        /// Show progress and a summary on stderr
        #[arg(short, long)]
        progress: bool,

        /// Write the file on a background worker and poll it until done
        #[arg(long, requires = "output")]
        background: bool,

        /// Print the summary as JSON on stderr
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            schema,
            columns,
            count,
            output,
            seed,
            delimiter,
            quote,
            escape,
            new_line,
            no_header,
            progress,
            background,
            json,
        } => generate::run(generate::GenerateArgs {
            schema,
            columns,
            count,
            output,
            seed,
            delimiter,
            quote,
            escape,
            new_line,
            no_header,
            progress,
            background,
            json,
        }),
        Commands::Completions { shell } => {
            generate_completions(shell, &mut Cli::command(), "csv-faker", &mut io::stdout());
            Ok(())
        }
    }
}
