use crate::error::ContractError;
use crate::types::{Message, MessageRecord, Proof, WeightedSigners};
use amb_std::interfaces::UpgradableInterface;
use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, String};

#[contractclient(name = "AmbBridgeClient")]
pub trait AmbBridgeInterface: UpgradableInterface {
    /// Requests a call of `contract` with `data` on the other chain.
    ///
    /// `sender` must authorize the request. The returned message id identifies the message on both chains.
    /// Fails with `GasLimitExceeded` if `gas` is above [`Self::max_gas_per_tx`].
    fn require_to_pass_message(
        env: Env,
        sender: Address,
        contract: Address,
        data: Bytes,
        gas: u64,
    ) -> Result<BytesN<32>, ContractError>;

    /// Upper bound on the gas a single message may request.
    fn max_gas_per_tx(env: &Env) -> u64;

    /// Sets the upper bound on the gas a single message may request. Only callable by the owner.
    fn set_max_gas_per_tx(env: Env, max_gas_per_tx: u64);

    /// Name of the chain this bridge is deployed on.
    fn source_chain(env: &Env) -> String;

    /// Name of the chain on the other side of the bridge.
    fn destination_chain(env: &Env) -> String;

    /// Executes a message from the other chain that the validator set has signed.
    ///
    /// The message is executed at most once. Returns whether the call into the executor succeeded;
    /// a failed call still marks the message as processed and keeps a failure record.
    fn execute_signatures(env: Env, message: Message, proof: Proof) -> Result<bool, ContractError>;

    /// Whether the call of the relayed message succeeded. `false` for unknown messages.
    fn message_call_status(env: &Env, message_id: BytesN<32>) -> bool;

    /// Executor of a relayed message whose call failed.
    fn failed_message_receiver(env: &Env, message_id: BytesN<32>) -> Option<Address>;

    /// Sender of a relayed message whose call failed.
    fn failed_message_sender(env: &Env, message_id: BytesN<32>) -> Option<Address>;

    /// Hash of the payload of a relayed message whose call failed.
    fn failed_message_data_hash(env: &Env, message_id: BytesN<32>) -> Option<BytesN<32>>;

    fn message_record(env: &Env, message_id: BytesN<32>) -> Option<MessageRecord>;

    fn is_message_relayed(env: &Env, message_id: BytesN<32>) -> bool;

    /// Rotates the validator set. The proof must be signed by the latest signer set.
    ///
    /// Bypassing the minimum rotation delay requires the operator's authorization.
    fn rotate_signers(
        env: Env,
        signers: WeightedSigners,
        proof: Proof,
        bypass_rotation_delay: bool,
    ) -> Result<(), ContractError>;

    /// Returns the epoch of the latest signer set.
    fn epoch(env: &Env) -> u64;

    fn epoch_by_signers_hash(env: &Env, signers_hash: BytesN<32>) -> Result<u64, ContractError>;

    fn signers_hash_by_epoch(env: &Env, epoch: u64) -> Result<BytesN<32>, ContractError>;
}
