use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::presenter::multiconnect_presenter::MultiConnectPresenter;

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    fn description() -> &'static str {
        "show both wallets, the last trade status and history"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        dialogue: MyDialogue,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Start command received in chat {}", chat_id);

        // Leave any unfinished trade prompt
        dialogue.exit().await?;

        let presenter = services.presenter(bot, chat_id);
        presenter.show_dashboard().await?;

        Ok(())
    }
}
