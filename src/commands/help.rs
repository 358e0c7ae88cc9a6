// src/commands/help.rs
use super::{register_commands, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::ethereum::transfer_value;
use crate::solana::{lamports_to_sol, TRANSFER_LAMPORTS};
use anyhow::Result;
use ethers::utils::format_ether;
use std::sync::Arc;
use teloxide::prelude::*;

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    fn description() -> &'static str {
        "display this help message"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: MyDialogue,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        bot.send_message(msg.chat.id, help_text()).await?;

        Ok(())
    }
}

pub fn help_text() -> String {
    let mut text = String::from("Available commands:\n");
    for (name, description) in register_commands() {
        text.push_str(&format!("/{} - {}\n", name, description));
    }
    text.push_str(&format!(
        "\nEvery trade sends {} ETH from the Ethereum wallet or {} SOL from the Solana wallet.\n\
         The Ethereum wallet is used whenever it is connected and the address is a valid Ethereum address.",
        format_ether(transfer_value())
            .trim_end_matches('0')
            .trim_end_matches('.'),
        lamports_to_sol(TRANSFER_LAMPORTS)
    ));
    text
}
