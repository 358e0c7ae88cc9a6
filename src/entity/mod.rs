mod blockchain;
mod bot_error;
mod connection;
mod session;
mod state;
mod trade_record;

pub use blockchain::Blockchain;
pub use bot_error::BotError;
pub use connection::{Connection, Connections, EthereumConnection, SolanaConnection};
pub use session::{Dashboard, Session};
pub use state::State;
pub use trade_record::TradeRecord;
