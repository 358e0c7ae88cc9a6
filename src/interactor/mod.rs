pub mod trade_interactor;
pub mod wallet_interactor;
