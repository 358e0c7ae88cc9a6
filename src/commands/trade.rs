use anyhow::Result;
use log::{error, info};
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::presenter::multiconnect_presenter::MultiConnectPresenter;

pub struct TradeCommand;

impl CommandHandler for TradeCommand {
    fn command_name() -> &'static str {
        "trade"
    }

    fn description() -> &'static str {
        "send a trade to an Ethereum or Solana address"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        dialogue: MyDialogue,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Trade command initiated in chat {}", msg.chat.id);

        dialogue.update(State::AwaitingTradeAddress).await?;

        let presenter = services.presenter(bot, msg.chat.id);
        presenter.start_trade().await?;

        Ok(())
    }
}

/// `/trade <address>` submits right away, a bare `/trade` asks for the address
pub async fn handle_trade_command(
    bot: Bot,
    msg: Message,
    address: String,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    if address.trim().is_empty() {
        return TradeCommand::execute(bot, msg, dialogue, services).await;
    }

    dialogue.exit().await?;
    submit_trade(bot, msg.chat.id, address, services);

    Ok(())
}

pub async fn receive_trade_address(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    match msg.text() {
        Some(address) => {
            dialogue.exit().await?;
            submit_trade(bot, msg.chat.id, address.to_string(), services);
        }
        None => {
            bot.send_message(msg.chat.id, "Please enter the address as text:")
                .await?;
        }
    }

    Ok(())
}

/// Trades are not serialized: each one runs as its own task and reports
/// whenever it finishes.
fn submit_trade(bot: Bot, chat_id: ChatId, address: String, services: Arc<ServiceContainer>) {
    info!("Trade to {:?} submitted in chat {}", address, chat_id);

    let presenter = services.presenter(bot, chat_id);
    tokio::spawn(async move {
        if let Err(e) = presenter.handle_trade(&address).await {
            error!("Failed to report trade status in chat {}: {}", chat_id, e);
        }
    });
}
