use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::entity::{Blockchain, BotError, Session};
use crate::interactor::trade_interactor::{TradeInteractor, TradeOutcome};
use crate::interactor::wallet_interactor::WalletConnector;
use crate::view::multiconnect_view::MultiConnectView;

#[async_trait]
pub trait MultiConnectPresenter: Send + Sync {
    async fn show_dashboard(&self) -> Result<()>;
    async fn connect_wallet(&self, blockchain: Blockchain) -> Result<()>;
    async fn start_trade(&self) -> Result<()>;
    async fn handle_trade(&self, address: &str) -> Result<TradeOutcome>;
    async fn show_trade_history(&self) -> Result<()>;
}

pub struct MultiConnectPresenterImpl<I, V> {
    session: Arc<Mutex<Session>>,
    ethereum_connector: Arc<dyn WalletConnector>,
    solana_connector: Arc<dyn WalletConnector>,
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> MultiConnectPresenterImpl<I, V>
where
    I: TradeInteractor,
    V: MultiConnectView,
{
    pub fn new(
        session: Arc<Mutex<Session>>,
        ethereum_connector: Arc<dyn WalletConnector>,
        solana_connector: Arc<dyn WalletConnector>,
        interactor: Arc<I>,
        view: Arc<V>,
    ) -> Self {
        Self {
            session,
            ethereum_connector,
            solana_connector,
            interactor,
            view,
        }
    }

    fn connector(&self, blockchain: Blockchain) -> &Arc<dyn WalletConnector> {
        match blockchain {
            Blockchain::Ethereum => &self.ethereum_connector,
            Blockchain::Solana => &self.solana_connector,
        }
    }
}

#[async_trait]
impl<I, V> MultiConnectPresenter for MultiConnectPresenterImpl<I, V>
where
    I: TradeInteractor + Send + Sync,
    V: MultiConnectView + Send + Sync,
{
    async fn show_dashboard(&self) -> Result<()> {
        let dashboard = self.session.lock().await.dashboard();
        self.view.display_dashboard(&dashboard).await
    }

    async fn connect_wallet(&self, blockchain: Blockchain) -> Result<()> {
        let existing = self.session.lock().await.connections.address(blockchain);
        if let Some(address) = existing {
            self.view.display_wallet_connected(blockchain, &address).await?;
            return Ok(());
        }

        match self.connector(blockchain).connect().await {
            Ok(connection) => {
                info!(
                    "Attaching {} wallet {} to session",
                    connection.blockchain(),
                    connection.address()
                );
                let address = {
                    let mut session = self.session.lock().await;
                    if !session.connections.attach(connection) {
                        info!("{} wallet was connected concurrently, keeping the first handle", blockchain);
                    }
                    session.connections.address(blockchain).unwrap_or_default()
                };
                self.view.display_wallet_connected(blockchain, &address).await
            }
            Err(e) => {
                error!("Error connecting to {} wallet: {:#}", blockchain, e);
                match e.downcast_ref::<BotError>() {
                    Some(BotError::ProviderNotInstalled(_)) => {
                        self.view.display_provider_missing(blockchain).await
                    }
                    _ => self.view.display_connection_failed(blockchain).await,
                }
            }
        }
    }

    async fn start_trade(&self) -> Result<()> {
        self.view.prompt_for_trade_address().await
    }

    async fn handle_trade(&self, address: &str) -> Result<TradeOutcome> {
        let connections = {
            let mut session = self.session.lock().await;
            session.trade_status.clear();
            session.connections.clone()
        };

        let outcome = self.interactor.execute_trade(address.trim(), &connections).await;
        let status = outcome.status_message();

        {
            let mut session = self.session.lock().await;
            if let Some(record) = outcome.record() {
                session.record_trade(record.clone());
            }
            session.trade_status = status.clone();
        }

        self.view.display_trade_status(&status).await?;

        Ok(outcome)
    }

    async fn show_trade_history(&self) -> Result<()> {
        let history = self.session.lock().await.trade_history().to_vec();
        self.view.display_trade_history(&history).await
    }
}
