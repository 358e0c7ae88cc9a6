use async_trait::async_trait;
use log::warn;
use std::sync::Arc;
use teloxide::{
    dispatching::dialogue::InMemStorage, dispatching::UpdateHandler, prelude::*,
};

use crate::commands::{
    self, callback::handle_callback, BotCommands, CommandHandler, MyDialogue,
};
use crate::di::ServiceContainer;
use crate::entity::State;

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation. The service container and dialogue storage
// are injected as dispatcher dependencies.
#[derive(Default)]
pub struct TelegramRouter;

impl TelegramRouter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;
        use teloxide::dispatching::UpdateFilterExt;

        // Use BotCommands enum with teloxide's command filter
        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(case![BotCommands::Start].endpoint(
                |bot: Bot, msg: Message, dialogue: MyDialogue, services: Arc<ServiceContainer>| async move {
                    commands::start::StartCommand::execute(bot, msg, dialogue, services).await
                },
            ))
            .branch(case![BotCommands::Help].endpoint(
                |bot: Bot, msg: Message, dialogue: MyDialogue, services: Arc<ServiceContainer>| async move {
                    commands::help::HelpCommand::execute(bot, msg, dialogue, services).await
                },
            ))
            .branch(case![BotCommands::ConnectEthereum].endpoint(
                |bot: Bot, msg: Message, dialogue: MyDialogue, services: Arc<ServiceContainer>| async move {
                    commands::connect::ConnectEthereumCommand::execute(bot, msg, dialogue, services)
                        .await
                },
            ))
            .branch(case![BotCommands::ConnectSolana].endpoint(
                |bot: Bot, msg: Message, dialogue: MyDialogue, services: Arc<ServiceContainer>| async move {
                    commands::connect::ConnectSolanaCommand::execute(bot, msg, dialogue, services)
                        .await
                },
            ))
            .branch(case![BotCommands::Trade(address)].endpoint(
                |bot: Bot,
                 msg: Message,
                 address: String,
                 dialogue: MyDialogue,
                 services: Arc<ServiceContainer>| async move {
                    commands::trade::handle_trade_command(bot, msg, address, dialogue, services)
                        .await
                },
            ))
            .branch(case![BotCommands::History].endpoint(
                |bot: Bot, msg: Message, dialogue: MyDialogue, services: Arc<ServiceContainer>| async move {
                    commands::history::HistoryCommand::execute(bot, msg, dialogue, services).await
                },
            ));

        let message_handler = Update::filter_message()
            .branch(command_handler)
            .branch(
                case![State::AwaitingTradeAddress].endpoint(commands::trade::receive_trade_address),
            );

        // Add callback query handler for our buttons
        let callback_handler = Update::filter_callback_query().endpoint(handle_callback);

        // Wallets move real funds: drop updates from anyone but the owner
        let authorized = dptree::filter(|update: Update, services: Arc<ServiceContainer>| {
            let telegram_id = update.from().map(|user| user.id.0 as i64);
            let allowed = services.is_authorized(telegram_id);
            if !allowed {
                warn!("Ignoring update from unauthorized user {:?}", telegram_id);
            }
            allowed
        });

        authorized.chain(
            teloxide::dispatching::dialogue::enter::<Update, InMemStorage<State>, State, _>()
                .branch(message_handler)
                .branch(callback_handler),
        )
    }
}
