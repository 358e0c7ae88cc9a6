use anyhow::Result;
use std::sync::Arc;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::*};

use crate::di::ServiceContainer;
use crate::entity::State;
use teloxide::dispatching::dialogue::Dialogue;

pub mod callback;
pub mod connect;
pub mod help;
pub mod history;
pub mod start;
pub mod trade;
pub mod ui;

pub type MyDialogue = Dialogue<State, InMemStorage<State>>;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command
    async fn execute(
        bot: Bot,
        msg: Message,
        dialogue: MyDialogue,
        services: Arc<ServiceContainer>,
    ) -> Result<()>;
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            start::StartCommand::command_name(),
            start::StartCommand::description(),
        ),
        (
            connect::ConnectEthereumCommand::command_name(),
            connect::ConnectEthereumCommand::description(),
        ),
        (
            connect::ConnectSolanaCommand::command_name(),
            connect::ConnectSolanaCommand::description(),
        ),
        (
            trade::TradeCommand::command_name(),
            trade::TradeCommand::description(),
        ),
        (
            history::HistoryCommand::command_name(),
            history::HistoryCommand::description(),
        ),
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
    ]
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "show both wallets, the last trade status and history")]
    Start,
    #[command(rename = "connect_eth", description = "connect the Ethereum wallet (MetaMask)")]
    ConnectEthereum,
    #[command(rename = "connect_sol", description = "connect the Solana wallet (Phantom)")]
    ConnectSolana,
    #[command(description = "send a trade to an Ethereum or Solana address")]
    Trade(String),
    #[command(description = "show the trade history")]
    History,
    #[command(description = "display this help message")]
    Help,
}
