use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod gateways;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();
    let args = cli::Cli::parse();
    cli::run(args).await
}
