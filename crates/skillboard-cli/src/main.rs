mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    config::ConfigSubcommand, consultant::ConsultantSubcommand,
    submission::SubmissionSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillboard",
    about = "Consultant skills board: tiers, hours and capability coverage across solution plays",
    version,
    propagate_version = true
)]
struct Cli {
    /// Board root (default: auto-detect from .skillboard/ or .git/)
    #[arg(long, global = true, env = "SKILLBOARD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a skills board in the current directory
    Init,

    /// Manage consultant records
    Consultant {
        #[command(subcommand)]
        subcommand: ConsultantSubcommand,
    },

    /// Collection-wide totals
    Overview,

    /// Hours and tier for every consultant across every play
    Matrix,

    /// Qualified consultants and tier distribution for one play
    Analytics {
        /// Solution play name or slug (default: config default_play)
        #[arg(long)]
        play: Option<String>,
    },

    /// Capability coverage per play and area, or a deep dive into one play
    Capabilities {
        /// Solution play name or slug to drill into
        #[arg(long)]
        play: Option<String>,
    },

    /// List solution areas, plays, industries, regions and tiers
    Catalog,

    /// Record and review self-reported hours
    Submission {
        #[command(subcommand)]
        subcommand: SubmissionSubcommand,
    },

    /// Show or validate the board configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Launch the HTTP API server
    Ui {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Ui { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Consultant { subcommand } => cmd::consultant::run(&root, subcommand, cli.json),
        Commands::Overview => cmd::overview::run(&root, cli.json),
        Commands::Matrix => cmd::matrix::run(&root, cli.json),
        Commands::Analytics { play } => cmd::analytics::run(&root, play.as_deref(), cli.json),
        Commands::Capabilities { play } => {
            cmd::capabilities::run(&root, play.as_deref(), cli.json)
        }
        Commands::Catalog => cmd::catalog::run(cli.json),
        Commands::Submission { subcommand } => cmd::submission::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Ui { port, no_open } => cmd::ui::run(&root, port, no_open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
