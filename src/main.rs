use clap::{Parser as ClapParser, Subcommand};
use clon_lang::cli::{self, CheckOptions, CliError, FormatOptions, GetOptions};
use std::io::{self, Read};
use std::process;

#[derive(ClapParser)]
#[command(name = "clon")]
#[command(about = "Clon - parse, query and validate CLON documents")]
#[command(version)]
struct Cli {
    /// Log at debug level (CLON_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print it back
    Fmt {
        /// CLON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// One node per line
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the nodes a path selects
    Get {
        /// Path expression, e.g. tags.tag:1
        path: String,

        /// CLON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Print every match, one per line
        #[arg(short, long)]
        all: bool,

        /// One node per line
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate the nodes a path selects against a type:min-max constraint
    Check {
        /// Path expression, e.g. level:*
        path: String,

        /// Constraint, e.g. s:1-*
        constraint: String,

        /// CLON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Convert a document to JSON
    Json {
        /// CLON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'clon docs' to list categories)
        category: String,
    },
}

/// Exit status when a query ran but found nothing or failed validation
const EXIT_NEGATIVE: i32 = 1;
/// Exit status for malformed input or expressions
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::init_logging(cli.verbose) {
        eprintln!("{}", e);
    }

    let result = match cli.command {
        Commands::Fmt { input, pretty } => run_fmt(input, pretty),
        Commands::Get {
            path,
            input,
            all,
            pretty,
        } => run_get(path, input, all, pretty),
        Commands::Check {
            path,
            constraint,
            input,
        } => run_check(path, constraint, input),
        Commands::Json { input, pretty } => run_json(input, pretty),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(true)
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
            true
        }),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_NEGATIVE),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(EXIT_ERROR);
        }
    }
}

fn read_input(input: Option<String>) -> Result<Option<String>, CliError> {
    match input {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_fmt(input: Option<String>, pretty: bool) -> Result<bool, CliError> {
    let options = FormatOptions {
        input: read_input(input)?,
        pretty,
    };
    println!("{}", cli::execute_format(&options)?);
    Ok(true)
}

fn run_get(path: String, input: Option<String>, all: bool, pretty: bool) -> Result<bool, CliError> {
    let options = GetOptions {
        path,
        input: read_input(input)?,
        all,
        pretty,
    };

    let matches = cli::execute_get(&options)?;
    for output in &matches {
        println!("{}", output);
    }
    Ok(!matches.is_empty())
}

fn run_check(path: String, constraint: String, input: Option<String>) -> Result<bool, CliError> {
    let options = CheckOptions {
        path,
        constraint,
        input: read_input(input)?,
    };

    let valid = cli::execute_check(&options)?;
    println!("{}", valid);
    Ok(valid)
}

fn run_json(input: Option<String>, pretty: bool) -> Result<bool, CliError> {
    let options = FormatOptions {
        input: read_input(input)?,
        pretty,
    };
    println!("{}", cli::execute_json(&options)?);
    Ok(true)
}
