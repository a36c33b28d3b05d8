mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;

#[derive(Parser)]
#[command(
    name = "churn",
    author,
    version,
    about = "Total line insertions, deletions and net change across git history"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse();
    logging::init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let context = AppContext::new(config, git);

    cmd::totals::run(&context).await
}
