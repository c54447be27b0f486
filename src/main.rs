//! Command-line entry point
//!
//! A thin direct-invocation wrapper around the dispatcher: one operation
//! name plus a JSON input, response envelope printed to stdout. Exits
//! non-zero when the envelope carries an error.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;

use ledgerkeep::config::StoreConfig;
use ledgerkeep::dispatch::Dispatcher;
use ledgerkeep::storage::JsonStore;

#[derive(Parser)]
#[command(
    name = "ledgerkeep",
    version,
    about = "JSON-backed personal finance ledger",
    after_help = "Operations: user.list, user.add, user.update, user.delete,\n\
                  category.list, category.add, category.update, category.delete,\n\
                  entry.list, entry.add, entry.update, entry.delete,\n\
                  balance.category.total, balance.category.period"
)]
struct Cli {
    /// Operation name, e.g. "entry.add"
    operation: String,

    /// JSON input for the operation
    #[arg(default_value = "{}")]
    input: String,

    /// Path to the ledger store file
    #[arg(long, env = "LEDGERKEEP_STORE")]
    store: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.store {
        Some(path) => StoreConfig::with_path(path),
        None => StoreConfig::from_env(),
    };

    let input: Value =
        serde_json::from_str(&cli.input).context("input is not valid JSON")?;

    let dispatcher = Dispatcher::new(JsonStore::new(config.store_file()));
    let response = dispatcher.dispatch_envelope(&cli.operation, input);

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.get("error").is_some() {
        std::process::exit(1);
    }
    Ok(())
}
