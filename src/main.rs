//! Pokecache shell
//!
//! Interactive front end over a single cache instance.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::shell::{clean_input, Command, PROMPT};
use pokecache::{Cache, Config};

/// Main entry point for the cache shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache, which starts its reaper task
/// 4. Read commands from stdin until `exit`, EOF or Ctrl+C
/// 5. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Pokecache shell");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}ms",
        config.cache_interval_ms
    );

    let cache = Cache::new(config.interval()).context("failed to create cache")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read stdin")?,
            _ = signal::ctrl_c() => {
                warn!("Received Ctrl+C, leaving shell");
                None
            }
        };
        let Some(line) = line else { break };

        match Command::parse(&clean_input(&line)) {
            Ok(Some(command)) => {
                println!("{}", command.execute(&cache));
                if command == Command::Exit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => println!("{}", err),
        }

        prompt()?;
    }

    cache.stop();
    info!("Shell shutdown complete");
    Ok(())
}

fn prompt() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;
    Ok(())
}
