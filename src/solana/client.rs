use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;
use serde_json::json;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::RpcRequest;
use solana_sdk::{commitment_config::CommitmentConfig, hash::Hash, signature::Signature};
use std::str::FromStr;
use std::sync::Arc;

use crate::entity::BotError;
use crate::provider::{ClusterFactory, SolanaCluster};

/// Test cluster every Solana connection is opened against
pub const DEVNET_URL: &str = "https://api.devnet.solana.com";

/// Cluster connection over the nonblocking RPC client
pub struct RpcCluster {
    client: Arc<RpcClient>,
}

impl RpcCluster {
    pub fn new(client: Arc<RpcClient>) -> Self {
        Self { client }
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

/// Opens an [`RpcCluster`] for whatever endpoint the connector asks for
pub fn rpc_cluster_factory() -> ClusterFactory {
    Arc::new(|rpc_url: &str| {
        let client = RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());
        Arc::new(RpcCluster::new(Arc::new(client))) as Arc<dyn SolanaCluster>
    })
}

#[async_trait]
impl SolanaCluster for RpcCluster {
    async fn get_latest_blockhash(&self) -> Result<Hash> {
        let blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .map_err(|e| BotError::Solana(format!("Failed to get recent blockhash: {}", e)))?;

        Ok(blockhash)
    }

    async fn send_raw_transaction(&self, wire_transaction: &[u8]) -> Result<Signature> {
        let encoded = STANDARD.encode(wire_transaction);
        debug!("Sending {} byte transaction to {}", wire_transaction.len(), self.url());

        let signature: String = self
            .client
            .send(
                RpcRequest::SendTransaction,
                json!([encoded, { "encoding": "base64", "preflightCommitment": "confirmed" }]),
            )
            .await
            .map_err(|e| BotError::Solana(format!("Failed to send transaction: {}", e)))?;

        Signature::from_str(&signature)
            .map_err(|e| anyhow!("Cluster returned invalid signature {}: {}", signature, e))
    }

    async fn confirm_transaction(&self, signature: &Signature) -> Result<()> {
        self.client
            .poll_for_signature_with_commitment(signature, CommitmentConfig::confirmed())
            .await
            .map_err(|e| BotError::Confirmation(format!("{}: {}", signature, e)))?;

        Ok(())
    }
}
