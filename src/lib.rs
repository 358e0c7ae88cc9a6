pub mod commands;
pub mod config;
pub mod di;
pub mod entity;
pub mod ethereum;
pub mod interactor;
pub mod presenter;
pub mod provider;
pub mod router;
pub mod solana;
pub mod utils;
pub mod view;

use std::sync::Arc;

use teloxide::dispatching::dialogue::InMemStorage;

// Re-export commonly used items
pub use commands::MyDialogue;
pub use crate::config::Config;
pub use di::ServiceContainer;
pub use entity::{Blockchain, BotError, Dashboard, Session, State, TradeRecord};
pub use interactor::trade_interactor::{TradeInteractor, TradeInteractorImpl, TradeOutcome};
pub use interactor::wallet_interactor::{EthereumWalletConnector, SolanaWalletConnector, WalletConnector};
pub use presenter::multiconnect_presenter::{MultiConnectPresenter, MultiConnectPresenterImpl};
pub use provider::{InjectedProvider, ProviderEnvironment};
pub use router::{Router, TelegramRouter};
pub use view::multiconnect_view::{MultiConnectView, TelegramMultiConnectView};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire the router, the service container and the dialogue storage together
pub fn create_application(
    config: Config,
) -> anyhow::Result<(TelegramRouter, Arc<ServiceContainer>, Arc<InMemStorage<State>>)> {
    let services = Arc::new(ServiceContainer::from_config(config)?);
    let storage = InMemStorage::<State>::new();

    Ok((TelegramRouter::new(), services, storage))
}
