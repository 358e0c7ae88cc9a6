pub mod client;
pub mod transfer;

pub use client::{create_ethereum_provider, JsonRpcEthereumProvider};
pub use transfer::{build_eth_transfer, transfer_value};
