use ethers::types::{Address, TransactionRequest, U256};
use ethers::utils::WEI_IN_ETHER;

/// Every Ethereum trade moves exactly one ether
pub fn transfer_value() -> U256 {
    WEI_IN_ETHER
}

/// Builds the `{from, to, value}` transfer; gas and nonce are left to the provider
pub fn build_eth_transfer(from: Address, to: Address) -> TransactionRequest {
    TransactionRequest::new()
        .from(from)
        .to(to)
        .value(transfer_value())
}
