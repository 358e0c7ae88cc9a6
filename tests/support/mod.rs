//! Fake wallets, cluster and view shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use ethers::types::{Address, TransactionRequest, H256};
use solana_sdk::{
    hash::Hash, pubkey::Pubkey, signature::Keypair, signature::Signature, signer::Signer,
    transaction::Transaction,
};

use multiconnect_trade_bot::entity::{Blockchain, Dashboard, TradeRecord};
use multiconnect_trade_bot::provider::{
    ClusterFactory, EthereumProvider, SolanaCluster, SolanaWalletProvider,
};
use multiconnect_trade_bot::solana::KeypairWallet;
use multiconnect_trade_bot::view::multiconnect_view::MultiConnectView;

/// Checksummed address from the EIP-55 test vectors
pub const ETH_DESTINATION: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// USDC mint, a well-formed 32-byte base58 key
pub const SOL_DESTINATION: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

pub fn eth_account() -> Address {
    Address::repeat_byte(0x11)
}

#[derive(Default)]
pub struct FakeEthereumProvider {
    pub accounts: Vec<Address>,
    pub reject_request: bool,
    pub fail_send: bool,
    delays: Mutex<VecDeque<Duration>>,
    pub account_requests: AtomicUsize,
    pub sent: Mutex<Vec<TransactionRequest>>,
}

impl FakeEthereumProvider {
    pub fn with_account() -> Self {
        Self {
            accounts: vec![eth_account()],
            ..Self::default()
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accounts: vec![eth_account()],
            reject_request: true,
            ..Self::default()
        }
    }

    pub fn failing_send() -> Self {
        Self {
            accounts: vec![eth_account()],
            fail_send: true,
            ..Self::default()
        }
    }

    /// Delay applied to the next sends, in call order
    pub fn with_delays(self, delays: &[u64]) -> Self {
        *self.delays.lock().unwrap() = delays.iter().map(|ms| Duration::from_millis(*ms)).collect();
        self
    }

    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EthereumProvider for FakeEthereumProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        self.account_requests.fetch_add(1, Ordering::SeqCst);
        if self.reject_request {
            return Err(anyhow!("User rejected the request."));
        }
        Ok(self.accounts.clone())
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        Ok(self.accounts.clone())
    }

    async fn send_transaction(&self, transaction: TransactionRequest) -> Result<H256> {
        let delay = self.delays.lock().unwrap().pop_front();
        let index = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(transaction);
            sent.len() as u64
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_send {
            return Err(anyhow!("insufficient funds for gas * price + value"));
        }
        Ok(H256::from_low_u64_be(index))
    }
}

/// Phantom-like wallet wrapping a real keypair
pub struct FakeSolanaWallet {
    inner: KeypairWallet,
    pubkey: Pubkey,
    pub phantom: bool,
    pub reject_connect: bool,
    pub reject_sign: bool,
}

impl FakeSolanaWallet {
    pub fn new() -> Self {
        let keypair = Keypair::new();
        let pubkey = keypair.pubkey();
        Self {
            inner: KeypairWallet::new(keypair),
            pubkey,
            phantom: true,
            reject_connect: false,
            reject_sign: false,
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.pubkey
    }
}

#[async_trait]
impl SolanaWalletProvider for FakeSolanaWallet {
    fn is_phantom(&self) -> bool {
        self.phantom
    }

    async fn connect(&self) -> Result<()> {
        if self.reject_connect {
            return Err(anyhow!("User rejected the request."));
        }
        self.inner.connect().await
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.inner.public_key()
    }

    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        if self.reject_sign {
            return Err(anyhow!("User rejected the request."));
        }
        self.inner.sign_transaction(transaction).await
    }
}

#[derive(Default)]
pub struct FakeCluster {
    pub fail_blockhash: bool,
    pub fail_send: bool,
    pub fail_confirm: bool,
    pub sent: Mutex<Vec<Transaction>>,
    pub confirmed: Mutex<Vec<Signature>>,
}

impl FakeCluster {
    pub fn blockhash() -> Hash {
        Hash::new_from_array([9; 32])
    }

    pub fn sent(&self) -> Vec<Transaction> {
        self.sent.lock().unwrap().clone()
    }

    pub fn factory(cluster: Arc<FakeCluster>, opened: Arc<Mutex<Vec<String>>>) -> ClusterFactory {
        Arc::new(move |url: &str| {
            opened.lock().unwrap().push(url.to_string());
            cluster.clone() as Arc<dyn SolanaCluster>
        })
    }
}

#[async_trait]
impl SolanaCluster for FakeCluster {
    async fn get_latest_blockhash(&self) -> Result<Hash> {
        if self.fail_blockhash {
            return Err(anyhow!("connection refused"));
        }
        Ok(Self::blockhash())
    }

    async fn send_raw_transaction(&self, wire_transaction: &[u8]) -> Result<Signature> {
        if self.fail_send {
            return Err(anyhow!("Transaction simulation failed: insufficient lamports"));
        }
        let transaction: Transaction = bincode::deserialize(wire_transaction)?;
        let signature = transaction.signatures[0];
        self.sent.lock().unwrap().push(transaction);
        Ok(signature)
    }

    async fn confirm_transaction(&self, signature: &Signature) -> Result<()> {
        if self.fail_confirm {
            return Err(anyhow!("transaction expired"));
        }
        self.confirmed.lock().unwrap().push(*signature);
        Ok(())
    }
}

/// View that records what it was asked to display
#[derive(Default)]
pub struct RecordingView {
    pub events: Mutex<Vec<String>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl MultiConnectView for RecordingView {
    async fn display_dashboard(&self, dashboard: &Dashboard) -> Result<()> {
        self.push(format!(
            "dashboard eth={:?} sol={:?} status={:?} trades={}",
            dashboard.ethereum_address,
            dashboard.solana_address,
            dashboard.trade_status,
            dashboard.trade_history.len()
        ));
        Ok(())
    }

    async fn display_wallet_connected(&self, blockchain: Blockchain, address: &str) -> Result<()> {
        self.push(format!("connected {} {}", blockchain, address));
        Ok(())
    }

    async fn display_provider_missing(&self, blockchain: Blockchain) -> Result<()> {
        self.push(format!("missing {}", blockchain));
        Ok(())
    }

    async fn display_connection_failed(&self, blockchain: Blockchain) -> Result<()> {
        self.push(format!("failed {}", blockchain));
        Ok(())
    }

    async fn prompt_for_trade_address(&self) -> Result<()> {
        self.push("prompt".to_string());
        Ok(())
    }

    async fn display_trade_status(&self, status: &str) -> Result<()> {
        self.push(format!("status {}", status));
        Ok(())
    }

    async fn display_trade_history(&self, history: &[TradeRecord]) -> Result<()> {
        self.push(format!("history {}", history.len()));
        Ok(())
    }
}

/// Builds the JSON response body for a request path and JSON body
pub type Responder = Arc<dyn Fn(&str, &Value) -> Value + Send + Sync>;

/// Local HTTP endpoint answering JSON POSTs, one request per connection
pub struct HttpStub {
    pub url: String,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl HttpStub {
    pub async fn spawn(respond: Responder) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                tokio::spawn(serve(socket, respond.clone(), recorded.clone()));
            }
        });

        Self { url, requests }
    }

    /// Paths and bodies received so far
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(mut socket: TcpStream, respond: Responder, requests: Arc<Mutex<Vec<(String, Value)>>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let (path, body) = loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_string();
        let length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        let start = end + 4;
        if buf.len() >= start + length {
            let path = head
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or("/")
                .to_string();
            break (path, buf[start..start + length].to_vec());
        }
    };

    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let payload = respond(&path, &body).to_string();
    requests.lock().unwrap().push((path, body));

    let reply = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        payload.len(),
        payload
    );
    let _ = socket.write_all(reply.as_bytes()).await;
    let _ = socket.shutdown().await;
}
