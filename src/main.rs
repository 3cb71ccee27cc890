use clap::{Parser as ClapParser, Subcommand};
use sqlfile::cli::{self, CliError};
use sqlfile::{Parser, QueryStore};
use std::fs::File;
use std::io::{self, BufReader};

#[derive(ClapParser)]
#[command(name = "sqlfile")]
#[command(about = "Inspect named SQL queries in annotated .sql files")]
#[command(version)]
struct Cli {
    /// Keep inline -- comments in query bodies instead of stripping them
    #[arg(long, global = true)]
    keep_comments: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the query names declared in a file
    List {
        /// Query file (reads from stdin if not provided)
        file: Option<String>,
    },

    /// Print the query registered under a name
    Get {
        /// Name of the query to print
        name: String,

        /// Query file (reads from stdin if not provided)
        file: Option<String>,
    },

    /// Export all queries as a JSON object
    Export {
        /// Query file (reads from stdin if not provided)
        file: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let parser = if cli.keep_comments {
        Parser::preserving_comments()
    } else {
        Parser::new()
    };

    match cli.command {
        Commands::List { file } => {
            let store = load_store(&parser, file)?;
            println!("{}", cli::execute_list(&store));
        }
        Commands::Get { name, file } => {
            let store = load_store(&parser, file)?;
            println!("{}", cli::execute_get(&store, &name)?);
        }
        Commands::Export { file, pretty } => {
            let store = load_store(&parser, file)?;
            println!("{}", cli::execute_export(&store, pretty)?);
        }
    }
    Ok(())
}

fn load_store(parser: &Parser, file: Option<String>) -> Result<QueryStore, CliError> {
    match file {
        Some(path) => {
            let file = File::open(path).map_err(CliError::Io)?;
            Ok(parser.parse(BufReader::new(file))?)
        }
        None if !atty::is(atty::Stream::Stdin) => {
            let stdin = io::stdin();
            Ok(parser.parse(stdin.lock())?)
        }
        None => Err(CliError::NoInput),
    }
}
