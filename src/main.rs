use anyhow::Result;
use clap::{Parser, Subcommand};
use generix::{BuiltinProvider, Generix, GenerixConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generix", version, about = "Load definition files through registered parsers")]
struct Cli {
    /// Config file (defaults to ./generix.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse files and print their definitions as JSON
    Parse {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Merge all definitions into one
        #[arg(long)]
        merge: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List registered extensions and the parser bound to each
    Extensions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GenerixConfig::from_file(path)?,
        None => GenerixConfig::load()?,
    };

    // Logs go to stderr so stdout stays machine-readable
    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone().unwrap_or_else(|| "info".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app = Generix::with_config(&BuiltinProvider, &config);

    match cli.command {
        Command::Parse {
            files,
            merge,
            pretty,
        } => {
            let output = if merge {
                to_json(&app.load_merged(&files)?, pretty)?
            } else {
                to_json(&app.parse_paths(&files)?, pretty)?
            };
            println!("{}", output);
        }
        Command::Extensions => {
            let registry = app.registry();
            if registry.is_empty() {
                println!("No parsers registered");
            }
            for (extension, class) in registry.bindings() {
                println!("{:<10} {}", extension, class);
            }
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
