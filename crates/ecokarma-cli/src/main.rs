//! ecokarma CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ecokarma", version, about = "Eco-footprint year-in-review generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the full wrapped presentation for a profile
    Run {
        /// Path to a .toml lifestyle profile
        #[arg(long)]
        profile: PathBuf,

        /// Cue backend: synth, null
        #[arg(long, default_value = "synth")]
        cues: String,

        /// Start with audio muted
        #[arg(long)]
        muted: bool,

        /// Directory to write the share report into when the final slide
        /// is reached
        #[arg(long)]
        report_out: Option<PathBuf>,

        /// Skip the calculating delay and use near-instant slide timing
        /// (for scripted or piped input)
        #[arg(long)]
        fast: bool,
    },

    /// Compute and print the verdict for a profile
    Score {
        /// Path to a .toml lifestyle profile
        #[arg(long)]
        profile: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate profile TOML files
    Validate {
        /// Path to a profile file or directory
        #[arg(long)]
        profile: PathBuf,
    },

    /// Re-render a saved karma report
    Render {
        /// Path to a report JSON written by `run`
        #[arg(long)]
        report: PathBuf,

        /// Output format: text, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file (html defaults to karma-card.html; text prints to
        /// stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create a starter profile
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ecokarma=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            profile,
            cues,
            muted,
            report_out,
            fast,
        } => commands::run::execute(profile, cues, muted, report_out, fast).await,
        Commands::Score { profile, json } => commands::score::execute(profile, json),
        Commands::Validate { profile } => commands::validate::execute(profile),
        Commands::Render {
            report,
            format,
            output,
        } => commands::render::execute(report, format, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
