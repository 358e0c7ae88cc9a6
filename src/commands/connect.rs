use anyhow::Result;
use log::{error, info};
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::Blockchain;
use crate::presenter::multiconnect_presenter::MultiConnectPresenter;

pub struct ConnectEthereumCommand;

impl CommandHandler for ConnectEthereumCommand {
    fn command_name() -> &'static str {
        "connect_eth"
    }

    fn description() -> &'static str {
        "connect the Ethereum wallet (MetaMask)"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: MyDialogue,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        connect_wallet(bot, msg.chat.id, Blockchain::Ethereum, services);
        Ok(())
    }
}

pub struct ConnectSolanaCommand;

impl CommandHandler for ConnectSolanaCommand {
    fn command_name() -> &'static str {
        "connect_sol"
    }

    fn description() -> &'static str {
        "connect the Solana wallet (Phantom)"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: MyDialogue,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        connect_wallet(bot, msg.chat.id, Blockchain::Solana, services);
        Ok(())
    }
}

/// The wallet may sit on a permission prompt, so the connect runs as its own
/// task and the chat keeps handling updates meanwhile.
fn connect_wallet(bot: Bot, chat_id: ChatId, blockchain: Blockchain, services: Arc<ServiceContainer>) {
    info!("Connect {} wallet requested in chat {}", blockchain, chat_id);

    let presenter = services.presenter(bot, chat_id);
    tokio::spawn(async move {
        if let Err(e) = presenter.connect_wallet(blockchain).await {
            error!("Failed to report {} connection in chat {}: {}", blockchain, chat_id, e);
        }
    });
}
