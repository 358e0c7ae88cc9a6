use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::entity::{Blockchain, BotError, Connection, EthereumConnection, SolanaConnection};
use crate::provider::{ClusterFactory, ProviderEnvironment};

/// Connect flow for one chain's injected wallet
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Ask the wallet for account access. May prompt the wallet owner.
    async fn connect(&self) -> Result<Connection>;
}

pub struct EthereumWalletConnector {
    providers: ProviderEnvironment,
}

impl EthereumWalletConnector {
    pub fn new(providers: ProviderEnvironment) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl WalletConnector for EthereumWalletConnector {
    async fn connect(&self) -> Result<Connection> {
        let provider = self
            .providers
            .ethereum()
            .ok_or(BotError::ProviderNotInstalled(Blockchain::Ethereum))?;

        provider.request_accounts().await?;
        let accounts = provider.accounts().await?;
        let address = *accounts
            .first()
            .ok_or(BotError::NoAccounts(Blockchain::Ethereum))?;

        info!("Ethereum wallet connected: {:?}", address);

        Ok(Connection::Ethereum(EthereumConnection { address, provider }))
    }
}

pub struct SolanaWalletConnector {
    providers: ProviderEnvironment,
    cluster_factory: ClusterFactory,
    cluster_url: String,
}

impl SolanaWalletConnector {
    pub fn new(providers: ProviderEnvironment, cluster_factory: ClusterFactory, cluster_url: &str) -> Self {
        Self {
            providers,
            cluster_factory,
            cluster_url: cluster_url.to_string(),
        }
    }
}

#[async_trait]
impl WalletConnector for SolanaWalletConnector {
    async fn connect(&self) -> Result<Connection> {
        let wallet = self
            .providers
            .solana()
            .filter(|wallet| wallet.is_phantom())
            .ok_or(BotError::ProviderNotInstalled(Blockchain::Solana))?;

        wallet.connect().await?;
        let address = wallet
            .public_key()
            .ok_or(BotError::NoAccounts(Blockchain::Solana))?;

        let cluster = (self.cluster_factory)(&self.cluster_url);

        info!(
            "Solana wallet connected: {} (cluster {})",
            address, self.cluster_url
        );

        Ok(Connection::Solana(SolanaConnection {
            address,
            wallet,
            cluster,
        }))
    }
}
