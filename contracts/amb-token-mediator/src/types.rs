use crate::error::ContractError;
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env};

/// How the mediator takes tokens from senders and gives them to recipients.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum TokenManagerType {
    /// Tokens are locked in the mediator and unlocked when they come back.
    LockUnlock = 0,
    /// Tokens are burned when they leave and minted when they arrive.
    /// The mediator must be the admin of the token.
    MintBurn = 1,
}

/// Calls between the two mediators, carried as the data of a bridge message.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediatorMessage {
    /// Give `value` tokens to the recipient. The nonce keeps the data hash of every transfer unique.
    HandleBridgedTokens(Address, i128, u64),
    /// Refund the transfer whose message data hashes to the given value.
    FixFailedMessage(BytesN<32>),
}

impl MediatorMessage {
    pub fn encode(&self, env: &Env) -> Bytes {
        self.clone().to_xdr(env)
    }

    pub fn decode(env: &Env, data: &Bytes) -> Result<Self, ContractError> {
        Self::from_xdr(env, data).map_err(|_| ContractError::InvalidMessageData)
    }
}

/// Origin side bookkeeping of a transfer, keyed by the hash of its message data.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixRecord {
    pub fixed: bool,
    pub recipient: Address,
    pub value: i128,
}
