use soroban_sdk::{contracttype, BytesN};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Bridge,
    Token,
    TokenManagerType,
    MediatorOnOtherSide,
    RequestGasLimit,
    Nonce,
    FixRecord(BytesN<32>),
}
