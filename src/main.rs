//! Multi-Connect Trade Bot - Main executable
//!
//! Entry point for the Telegram bot that connects an Ethereum wallet and a
//! Solana wallet and sends a fixed one-unit transfer to an address typed
//! into the chat.
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use multiconnect_trade_bot::{create_application, Config, Router};
use teloxide::{dptree, Bot};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting Multi-Connect Trade Bot v{}",
        multiconnect_trade_bot::VERSION
    );

    // Load and validate configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Create Telegram bot instance
    let bot = Bot::new(config.telegram_bot_token.clone());

    // Initialize the application components
    info!("Initializing bot application...");
    let (router, services, storage) =
        create_application(config).context("Failed to initialize wallet providers")?;

    // Get the handler from the router
    let handler = router.setup_handlers();

    // Build dispatcher with dependency injections and control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services, storage])
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    Ok(())
}
