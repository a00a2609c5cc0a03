use clap::Parser;

use plasma_node::cli;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = cli::run(cli) {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
