use clap::{Parser as ClapParser, Subcommand};
use elseql::cli::{self, CheckOptions, CheckResult, CliError};
use elseql::config::DEFAULT_HOST;
use elseql::ClientConfig;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "elseql")]
#[command(about = "ELSEQL - A SQL-flavored query language for search engines")]
#[command(version)]
struct Cli {
    /// Log parser and request details to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a statement into a search request
    Check {
        /// The ELSEQL statement (reads from stdin if not provided)
        query: Vec<String>,

        /// Search engine base URL
        #[arg(long, env = "ELSEQL_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Pretty-print the request body
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't build the request
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the parsed syntax tree as JSON
    Parse {
        /// The ELSEQL statement (reads from stdin if not provided)
        query: Vec<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'elseql docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let result = match cli.command {
        Commands::Check {
            query,
            host,
            pretty,
            syntax_only,
        } => run_check(query, host, pretty, syntax_only),
        Commands::Parse { query, pretty } => run_parse(query, pretty),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Statement from the command line words, or stdin when piped.
fn read_query(words: Vec<String>) -> Result<String, CliError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    if atty::is(atty::Stream::Stdin) {
        return Err(CliError::NoInput);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn to_json(value: &serde_json::Value, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;
    Ok(json)
}

fn run_check(
    query: Vec<String>,
    host: String,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let options = CheckOptions {
        query: read_query(query)?,
        config: ClientConfig::new(host),
        syntax_only,
    };
    debug!(query = %options.query, host = %options.config.host, "check");

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Request(request) => {
            println!("POST {}", request.url);
            println!("{}", to_json(&request.body, pretty)?);
        }
    }
    Ok(())
}

fn run_parse(query: Vec<String>, pretty: bool) -> Result<(), CliError> {
    let tree = cli::execute_parse(&read_query(query)?)?;
    println!("{}", to_json(&tree, pretty)?);
    Ok(())
}
