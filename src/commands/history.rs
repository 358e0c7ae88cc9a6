use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::presenter::multiconnect_presenter::MultiConnectPresenter;

pub struct HistoryCommand;

impl CommandHandler for HistoryCommand {
    fn command_name() -> &'static str {
        "history"
    }

    fn description() -> &'static str {
        "show the trade history"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: MyDialogue,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let presenter = services.presenter(bot, msg.chat.id);
        presenter.show_trade_history().await
    }
}
