use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::commands::{connect, history, start, trade, ui, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;

// Main callback handler function
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    // Extract the callback data
    let callback_data = match q.data.clone() {
        Some(data) => data,
        None => return Ok(()),
    };

    info!(
        "Received callback: {} from user {}",
        callback_data, q.from.id
    );

    // Acknowledge the callback query to stop loading animation
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        info!("Failed to answer callback query: {}", err);
    }

    // Buttons on messages too old to access carry no chat to answer in
    let message = match q.regular_message() {
        Some(message) => message.clone(),
        None => {
            info!("Callback {} came from an inaccessible message", callback_data);
            return Ok(());
        }
    };

    match callback_data.as_str() {
        ui::CONNECT_ETHEREUM => {
            connect::ConnectEthereumCommand::execute(bot, message, dialogue, services).await?
        }
        ui::CONNECT_SOLANA => {
            connect::ConnectSolanaCommand::execute(bot, message, dialogue, services).await?
        }
        ui::TRADE => trade::TradeCommand::execute(bot, message, dialogue, services).await?,
        ui::HISTORY => history::HistoryCommand::execute(bot, message, dialogue, services).await?,
        ui::REFRESH => start::StartCommand::execute(bot, message, dialogue, services).await?,
        other => info!("Ignoring unknown callback: {}", other),
    }

    Ok(())
}
