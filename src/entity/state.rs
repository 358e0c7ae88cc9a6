#[derive(Clone, Default, Debug)]
pub enum State {
    #[default]
    Start,
    AwaitingTradeAddress,
}
