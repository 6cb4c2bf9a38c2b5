use crate::error::ContractError;
use crate::types::{FixRecord, TokenManagerType};
use amb_std::interfaces::UpgradableInterface;
use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env};

#[contractclient(name = "AmbTokenMediatorClient")]
pub trait AmbTokenMediatorInterface: UpgradableInterface {
    /// The Stellar asset bridged by this mediator.
    fn token(env: &Env) -> Address;

    fn token_manager_type(env: &Env) -> TokenManagerType;

    /// The mediator on the other chain, the only trusted sender of inbound messages.
    fn mediator_on_other_side(env: &Env) -> Option<Address>;

    /// Sets the mediator on the other chain. Only callable by the owner.
    fn set_mediator_on_other_side(env: Env, mediator: Address);

    /// Gas allowance requested for every message sent by this mediator.
    fn request_gas_limit(env: &Env) -> u64;

    /// Sets the gas allowance of outbound messages. Only callable by the owner.
    ///
    /// Fails with `GasLimitExceeded` if it is above the bridge's `max_gas_per_tx`.
    fn set_request_gas_limit(env: Env, request_gas_limit: u64) -> Result<(), ContractError>;

    /// Bridges `value` tokens of `from` to the other chain.
    ///
    /// The receiver on the other chain is `data` decoded as an XDR encoded address, or `from` if `data` is empty.
    fn on_token_transfer(
        env: Env,
        from: Address,
        value: i128,
        data: Bytes,
    ) -> Result<bool, ContractError>;

    /// Bridges `value` tokens of `from` to `receiver` on the other chain. Returns the id of the bridge message.
    fn relay_tokens(
        env: Env,
        from: Address,
        receiver: Address,
        value: i128,
    ) -> Result<BytesN<32>, ContractError>;

    /// Asks the mediator on the other chain to give back the tokens of a transfer that failed on this chain.
    ///
    /// Anyone can request the fix. Returns the id of the fix message.
    fn request_failed_message_fix(
        env: Env,
        message_id: BytesN<32>,
    ) -> Result<BytesN<32>, ContractError>;

    /// Whether the tokens of the transfer with the given data hash were given back.
    fn message_fixed(env: &Env, data_hash: BytesN<32>) -> bool;

    fn fix_record(env: &Env, data_hash: BytesN<32>) -> Option<FixRecord>;
}
