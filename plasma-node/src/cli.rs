use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use plasma_chain::chain::ChildChain;

use crate::config::{NodeConfig, CONFIG_FILE_NAME};
use crate::error::NodeError;
use crate::replay::{read_blocks, replay_blocks};

#[derive(Parser)]
#[command(
    name = "plasma",
    about = "Plasma child chain operator tools",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a new configuration file
    Init {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: String,
    },
    /// Feed a JSON array of blocks through a fresh chain, in file order
    Replay {
        /// Path to config file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: String,
        /// Path to the block file
        blocks: String,
    },
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .try_init();
}

pub fn run(cli: Cli) -> Result<(), NodeError> {
    match cli.command {
        Command::Init { dir } => {
            init_logging("info");
            NodeConfig::init(&dir)?;
            tracing::info!(dir = %dir, "wrote {}", CONFIG_FILE_NAME);
            Ok(())
        }
        Command::Replay { config, blocks } => {
            let loaded = NodeConfig::load(&config);
            init_logging(
                loaded
                    .as_ref()
                    .map(|c| c.logging.level.as_str())
                    .unwrap_or("info"),
            );
            let config = loaded?;

            let mut chain = ChildChain::new(config.chain)?;
            let blocks = read_blocks(&blocks)?;
            let summary = replay_blocks(&mut chain, blocks);

            tracing::info!(
                submitted = summary.submitted,
                admitted = summary.admitted,
                buffered = summary.buffered,
                stale = summary.stale,
                rejected = summary.rejected,
                unresolved = summary.unresolved,
                "replay finished"
            );
            println!("{}", summary);
            Ok(())
        }
    }
}
