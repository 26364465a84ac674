use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Earth Mover's Distance between weighted signatures", long_about = None)]
pub struct Query {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Distance for one problem {weight1, weight2, cost} read as JSON",
        alias = "dist"
    )]
    Distance {
        /// JSON file, or - for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Print the transport plan alongside the distance
        #[arg(long)]
        flow: bool,
        /// Pivot budget before giving up
        #[arg(long)]
        limit: Option<usize>,
        /// Reduced-cost tolerance relative to the largest cost
        #[arg(long, default_value_t = crate::EMD_TOLERANCE)]
        tolerance: f64,
    },
    #[command(
        about = "Condensed distances between {signatures} under one square cost",
        alias = "pw"
    )]
    Pairwise {
        /// JSON file, or - for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}
