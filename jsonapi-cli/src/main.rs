use anyhow::Result;
use clap::{Parser, Subcommand};
use jsonapi_cli::{commands, OutputFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "jsonapi")]
#[command(about = "jsonapi - Inspect, verify and normalize JSON:API documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shape and member counts of a document
    Inspect {
        /// Input document ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check meta, links and full linkage of a document
    Verify {
        /// Input document ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// List relationship targets that are not included
        #[arg(long)]
        report_external: bool,
    },

    /// Decode, validate and re-encode a document
    Normalize {
        /// Input document ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output document ("-" for stdout)
        #[arg(short, long)]
        output: String,

        /// Replace relationship placeholders with included bodies
        #[arg(long)]
        alias: bool,

        /// Output formatting
        #[arg(long, value_enum, default_value = "compact")]
        format: OutputFormat,

        /// Add a jsonapi version object when the document has none
        #[arg(long)]
        stamp_version: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Inspect { input, json } => commands::inspect::execute(&input, json),

        Commands::Verify {
            input,
            report_external,
        } => commands::verify::execute(&input, report_external),

        Commands::Normalize {
            input,
            output,
            alias,
            format,
            stamp_version,
        } => commands::normalize::execute(&input, &output, alias, format, stamp_version),
    }
}
