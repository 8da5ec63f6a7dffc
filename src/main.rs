use std::{io, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use persondb::{
    console,
    controller::person::PersonController,
    database::{options::StoreOptions, store::PersonStore},
};

/// 📀 persondb, keeps people in memory and applies the commands read from stdin
///
/// Commands: `index`, `create`, `create <json>`, `edit <id>`, `edit <id> <json>`, `quit`.
/// Every response is written to stdout as a single JSON line, logs go to stderr.
#[derive(Parser, Debug)]
struct Cli {
    /// JSON file holding an array of people to load on startup
    #[clap(short, long)]
    seed: Option<PathBuf>,

    /// Default log filter, `RUST_LOG` takes precedence
    #[clap(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(args.log_level.as_str()));

    let options = StoreOptions::default().set_seed_file(args.seed);

    let store = PersonStore::open(&options).context("Unable to open the person store")?;

    log::info!("Person store ready [People: {}]", store.len());

    let controller = PersonController::new(Arc::new(store));

    let executed = console::run(&controller, io::stdin().lock(), io::stdout().lock())
        .context("Console session failed")?;

    log::info!("Shutting down [CommandsExecuted: {}]", executed);

    Ok(())
}
