use soroban_sdk::{contracttype, BytesN, String};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Bridge
    SourceChain,
    DestinationChain,
    MaxGasPerTx,
    Nonce,
    MessageRecord(BytesN<32>),
    /// Auth Module
    PreviousSignersRetention,
    DomainSeparator,
    MinimumRotationDelay,
    Epoch,
    LastRotationTimestamp,
    SignersHashByEpoch(u64),
    EpochBySignersHash(BytesN<32>),
}

/// Preimage of a message id, unique per source chain.
#[contracttype]
#[derive(Clone, Debug)]
pub struct MessageIdKey {
    pub source_chain: String,
    pub nonce: u64,
}
