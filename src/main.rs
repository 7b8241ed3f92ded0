use clap::{Parser as ClapParser, Subcommand};
use pipegen::CompileOptions;
use pipegen::cli::{self, CliError, CompileCommand, SampleOptions};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "pipegen")]
#[command(about = "Pipegen - compile group/filter/calculate queries into aggregation pipelines")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a query document into pipeline stages
    Compile {
        /// The JSON query document
        query: Option<String>,

        /// Read the query from a file (reads from stdin if neither is given)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Compile the bundled example query
        #[arg(long, conflicts_with_all = ["query", "input"])]
        example: bool,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Reject extra group fields and calculate without group
        #[arg(long)]
        strict: bool,

        /// Group field that is bucketed by day
        #[arg(long, default_value = "date")]
        date_field: String,

        /// Format pattern for the day bucket
        #[arg(long, default_value = "%d.%m.%Y")]
        date_format: String,
    },

    /// Compile a single calculate expression
    Expr {
        /// Infix arithmetic expression, e.g. '($a + $b) * $count'
        expression: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Generate sample deal records
    Sample {
        /// Number of records
        #[arg(short, long, default_value_t = 100)]
        count: usize,

        /// Seed for repeatable output
        #[arg(long)]
        seed: Option<u64>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the query language reference
    Docs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            query,
            input,
            example,
            pretty,
            strict,
            date_field,
            date_format,
        } => {
            let options = CompileOptions {
                date_field,
                date_format,
                strict,
            };
            run_compile(query, input, example, pretty, options)
        }
        Commands::Expr { expression, pretty } => cli::execute_expr(&expression)
            .and_then(|value| cli::render(&value, pretty))
            .map(|text| println!("{}", text)),
        Commands::Sample {
            count,
            seed,
            pretty,
        } => {
            let value = cli::execute_sample(&SampleOptions { count, seed });
            cli::render(&value, pretty).map(|text| println!("{}", text))
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_compile(
    query: Option<String>,
    input: Option<PathBuf>,
    example: bool,
    pretty: bool,
    options: CompileOptions,
) -> Result<(), CliError> {
    let query = match (query, input) {
        (Some(q), _) => Some(q),
        (None, Some(path)) => Some(std::fs::read_to_string(path)?),
        (None, None) if !example && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        (None, None) => None,
    };

    let command = CompileCommand {
        query,
        example,
        options,
    };

    let pipeline = cli::execute_compile(&command)?;
    println!("{}", cli::render(&pipeline, pretty)?);
    Ok(())
}
