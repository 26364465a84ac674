//! Earth Mover's Distance CLI
//!
//! Options: distance [--flow] [--limit N] [--tolerance E], pairwise

fn main() -> anyhow::Result<()> {
    earthmover::cli::CLI::run()
}
