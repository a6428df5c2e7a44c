//! tgkit CLI: run the long-polling dispatcher or probe the bot token.
//! Config from env (via .env) and optional CLI args.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tgkit_api::Client;
use tgkit_core::init_tracing;
use tgkit_dispatch::{Dispatcher, HandlerChain, NoOpHandler, PollerConfig};
use tokio_util::sync::CancellationToken;
use tracing::info;

mod config;
use config::BotConfig;

#[derive(Parser)]
#[command(name = "tgkit")]
#[command(about = "Telegram long-polling bot runner", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dispatch loop (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Call getMe and print the bot identity; verifies the token.
    Check {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run(BotConfig::load(token)?).await,
        Commands::Check { token } => check(BotConfig::load(token)?).await,
    }
}

fn build_client(config: &BotConfig) -> Client {
    match &config.telegram_api_url {
        Some(url) => Client::with_base_url(&config.bot_token, url),
        None => Client::new(&config.bot_token),
    }
}

async fn run(config: BotConfig) -> Result<()> {
    init_tracing(config.log_file.as_deref())?;

    let client = Arc::new(build_client(&config));

    // Identity check before the loop starts; a bad token fails fast here
    // instead of looping in backoff.
    let me = client.get_me().await?;
    info!(
        id = me.id,
        username = me.username.as_deref().unwrap_or(""),
        "authenticated"
    );

    let chain = HandlerChain::new().add_handler(Arc::new(NoOpHandler));
    let dispatcher = Dispatcher::new(
        client.clone(),
        client,
        chain,
        PollerConfig::default(),
    );

    let cancel = CancellationToken::new();
    let loop_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received, shutting down");
            loop_cancel.cancel();
        }
    });

    dispatcher.run(cancel).await?;
    Ok(())
}

async fn check(config: BotConfig) -> Result<()> {
    let client = build_client(&config);
    let me = client.get_me().await?;

    println!("id: {}", me.id);
    println!("name: {}", me.first_name);
    if let Some(username) = &me.username {
        println!("username: @{}", username);
    }
    Ok(())
}
