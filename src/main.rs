use clap::{Args, Parser as ClapParser, Subcommand};
use rql_parser::cli::{self, CheckOptions, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "rql")]
#[command(about = "rql - Parse resource query language expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reject queries longer than this many bytes
    #[arg(long, global = true)]
    max_length: Option<usize>,

    /// Reject queries nested deeper than this
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Log parser activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct QueryArg {
    /// The RQL query (reads from stdin if not provided)
    query: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the syntax of a query
    Check(QueryArg),

    /// Print the parsed tree as JSON
    Ast {
        #[command(flatten)]
        query: QueryArg,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the token stream
    Tokens(QueryArg),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check(ref arg) => run_check(&cli, arg).map(|_| println!("Syntax is valid")),
        Commands::Ast { ref query, pretty } => run_check(&cli, query)
            .and_then(|node| cli::ast_to_json(&node, pretty))
            .map(|json| println!("{}", json)),
        Commands::Tokens(ref arg) => read_query(arg).map(|query| print!("{}", cli::tokens_listing(&query))),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_query(arg: &QueryArg) -> Result<String, CliError> {
    match &arg.query {
        Some(s) => Ok(s.clone()),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(cli: &Cli, arg: &QueryArg) -> Result<rql_parser::Node, CliError> {
    let options = CheckOptions {
        query: read_query(arg)?,
        max_length: cli.max_length,
        max_depth: cli.max_depth,
    };
    cli::execute_check(&options)
}
