use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::Result;
use log::{info, warn};
use teloxide::types::ChatId;
use teloxide::Bot;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::entity::Session;
use crate::ethereum::create_ethereum_provider;
use crate::interactor::trade_interactor::TradeInteractorImpl;
use crate::interactor::wallet_interactor::{
    EthereumWalletConnector, SolanaWalletConnector, WalletConnector,
};
use crate::presenter::multiconnect_presenter::MultiConnectPresenterImpl;
use crate::provider::{ClusterFactory, ProviderEnvironment};
use crate::solana::{rpc_cluster_factory, KeypairWallet, DEVNET_URL};
use crate::view::multiconnect_view::TelegramMultiConnectView;

pub type TelegramPresenter = MultiConnectPresenterImpl<TradeInteractorImpl, TelegramMultiConnectView>;

/// One session per chat, alive for the lifetime of the process
#[derive(Default)]
pub struct SessionStore {
    sessions: StdMutex<HashMap<ChatId, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self, chat_id: ChatId) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sessions
            .entry(chat_id)
            .or_insert_with(|| Arc::new(Mutex::new(Session::new())))
            .clone()
    }
}

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    config: Config,
    ethereum_connector: Arc<dyn WalletConnector>,
    solana_connector: Arc<dyn WalletConnector>,
    trade_interactor: Arc<TradeInteractorImpl>,
    sessions: SessionStore,
}

impl ServiceContainer {
    pub fn new(config: Config, providers: ProviderEnvironment, cluster_factory: ClusterFactory) -> Self {
        Self {
            config,
            ethereum_connector: Arc::new(EthereumWalletConnector::new(providers.clone())),
            solana_connector: Arc::new(SolanaWalletConnector::new(
                providers,
                cluster_factory,
                DEVNET_URL,
            )),
            trade_interactor: Arc::new(TradeInteractorImpl::new()),
            sessions: SessionStore::new(),
        }
    }

    /// Build the container from configuration, injecting whichever wallets are configured
    pub fn from_config(config: Config) -> Result<Self> {
        let mut providers = ProviderEnvironment::default();

        match config.ethereum_rpc_url.as_deref() {
            Some(rpc_url) => {
                info!("Ethereum provider available at {}", rpc_url);
                providers = providers.with_ethereum(create_ethereum_provider(rpc_url)?);
            }
            None => warn!("ETHEREUM_RPC_URL not set, Ethereum wallet will be reported as missing"),
        }

        match config.solana_keypair.as_deref() {
            Some(keypair) => {
                info!("Solana keypair wallet available");
                providers = providers.with_solana(Arc::new(KeypairWallet::from_base58(keypair)?));
            }
            None => warn!("SOLANA_KEYPAIR not set, Solana wallet will be reported as missing"),
        }

        Ok(Self::new(config, providers, rpc_cluster_factory()))
    }

    pub fn is_authorized(&self, telegram_id: Option<i64>) -> bool {
        self.config.is_authorized(telegram_id)
    }

    /// Presenter bound to the chat's session and a view writing into that chat
    pub fn presenter(&self, bot: Bot, chat_id: ChatId) -> TelegramPresenter {
        MultiConnectPresenterImpl::new(
            self.sessions.session(chat_id),
            self.ethereum_connector.clone(),
            self.solana_connector.clone(),
            self.trade_interactor.clone(),
            Arc::new(TelegramMultiConnectView::new(bot, chat_id)),
        )
    }
}
