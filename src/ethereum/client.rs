use anyhow::{anyhow, Result};
use async_trait::async_trait;
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::{Address, TransactionRequest, H256, U64};
use log::info;
use std::sync::Arc;

use crate::entity::BotError;
use crate::provider::EthereumProvider;

/// Ethereum provider backed by a JSON-RPC node that manages the accounts
/// (a local dev node, or a wallet bridge exposing `eth_requestAccounts`)
pub struct JsonRpcEthereumProvider {
    provider: Provider<Http>,
}

impl JsonRpcEthereumProvider {
    pub fn new(provider: Provider<Http>) -> Self {
        Self { provider }
    }
}

/// Create an Ethereum provider for the given RPC url
pub fn create_ethereum_provider(rpc_url: &str) -> Result<Arc<JsonRpcEthereumProvider>> {
    let provider = Provider::<Http>::try_from(rpc_url).map_err(|e| anyhow!("RPC error: {}", e))?;

    Ok(Arc::new(JsonRpcEthereumProvider::new(provider)))
}

#[async_trait]
impl EthereumProvider for JsonRpcEthereumProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        let accounts: Vec<Address> = self
            .provider
            .request("eth_requestAccounts", Vec::<String>::new())
            .await
            .map_err(|e| BotError::Ethereum(format!("eth_requestAccounts failed: {}", e)))?;

        Ok(accounts)
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        let accounts = self
            .provider
            .get_accounts()
            .await
            .map_err(|e| BotError::Ethereum(format!("eth_accounts failed: {}", e)))?;

        Ok(accounts)
    }

    async fn send_transaction(&self, transaction: TransactionRequest) -> Result<H256> {
        let pending = self
            .provider
            .send_transaction(transaction, None)
            .await
            .map_err(|e| BotError::Ethereum(format!("Failed to send transaction: {}", e)))?;

        let receipt = pending
            .await
            .map_err(|e| BotError::Ethereum(format!("Failed to get receipt: {}", e)))?
            .ok_or_else(|| BotError::Ethereum("Transaction dropped from mempool".to_string()))?;

        if receipt.status == Some(U64::zero()) {
            return Err(BotError::Ethereum(format!(
                "Transaction reverted: {:#x}",
                receipt.transaction_hash
            ))
            .into());
        }

        info!(
            "Ethereum transaction mined in block {:?}: {:#x}",
            receipt.block_number, receipt.transaction_hash
        );

        Ok(receipt.transaction_hash)
    }
}
