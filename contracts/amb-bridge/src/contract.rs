use crate::auth;
use crate::error::ContractError;
use crate::event::{MaxGasPerTxSetEvent, RelayedMessageEvent, UserRequestForSignatureEvent};
use crate::executable::AmbExecutableClient;
use crate::interface::AmbBridgeInterface;
use crate::storage_types::{DataKey, MessageIdKey};
use crate::types::{Message, MessageContext, MessageRecord, Proof, WeightedSigners};
use amb_std::events::Event;
use amb_std::interfaces::{OperatableInterface, OwnableInterface};
use amb_std::traits::ThenOk;
use amb_std::ttl::{extend_instance_ttl, extend_persistent_ttl};
use amb_std::{ensure, interfaces, Operatable, Ownable, Upgradable};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contract, contractimpl, log, Address, Bytes, BytesN, Env, String, Vec};

/// Smallest gas allowance a relayed message needs for its call to be attempted.
pub const MIN_GAS_PER_CALL: u64 = 21_000;

#[contract]
#[derive(Ownable, Operatable, Upgradable)]
pub struct AmbBridge;

#[contractimpl]
impl AmbBridge {
    /// Initialize the bridge between `source_chain` (this chain) and `destination_chain`.
    pub fn __constructor(
        env: Env,
        owner: Address,
        operator: Address,
        source_chain: String,
        destination_chain: String,
        max_gas_per_tx: u64,
        domain_separator: BytesN<32>,
        minimum_rotation_delay: u64,
        previous_signers_retention: u64,
        initial_signers: Vec<WeightedSigners>,
    ) -> Result<(), ContractError> {
        interfaces::set_owner(&env, &owner);
        interfaces::set_operator(&env, &operator);

        env.storage()
            .instance()
            .set(&DataKey::SourceChain, &source_chain);
        env.storage()
            .instance()
            .set(&DataKey::DestinationChain, &destination_chain);
        env.storage()
            .instance()
            .set(&DataKey::MaxGasPerTx, &max_gas_per_tx);

        auth::initialize_auth(
            env,
            domain_separator,
            minimum_rotation_delay,
            previous_signers_retention,
            initial_signers,
        )
    }
}

impl AmbBridge {
    // Modify this function to add migration logic
    const fn run_migration(_env: &Env, _migration_data: ()) {}

    fn next_message_id(env: &Env, source_chain: String) -> BytesN<32> {
        let nonce: u64 = env.storage().instance().get(&DataKey::Nonce).unwrap_or(0);
        env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));

        env.crypto()
            .keccak256(&MessageIdKey {
                source_chain,
                nonce,
            }
            .to_xdr(env))
            .into()
    }

    fn failed_message_record(env: &Env, message_id: BytesN<32>) -> Option<MessageRecord> {
        Self::message_record(env, message_id).filter(|record| !record.call_status)
    }

    /// Calls the executor of the message and reports whether the call succeeded.
    /// State changes of a failed call are rolled back by the host.
    fn call_executor(env: &Env, message: &Message) -> bool {
        if message.gas_limit < MIN_GAS_PER_CALL {
            log!(
                env,
                "gas limit {} of message {} is below the minimum per call",
                message.gas_limit,
                message.message_id
            );
            return false;
        }

        let context = MessageContext {
            message_id: message.message_id.clone(),
            source_chain: message.source_chain.clone(),
            sender: message.sender.clone(),
        };

        let result = AmbExecutableClient::new(env, &message.executor)
            .try_execute_message(&context, &message.data);

        matches!(result, Ok(Ok(())))
    }
}

#[contractimpl]
impl AmbBridgeInterface for AmbBridge {
    fn require_to_pass_message(
        env: Env,
        sender: Address,
        contract: Address,
        data: Bytes,
        gas: u64,
    ) -> Result<BytesN<32>, ContractError> {
        sender.require_auth();

        ensure!(
            gas <= Self::max_gas_per_tx(&env),
            ContractError::GasLimitExceeded
        );

        let source_chain = Self::source_chain(&env);
        let message_id = Self::next_message_id(&env, source_chain.clone());

        let message = Message {
            message_id: message_id.clone(),
            source_chain,
            destination_chain: Self::destination_chain(&env),
            sender,
            executor: contract,
            gas_limit: gas,
            data,
        };

        extend_instance_ttl(&env);

        UserRequestForSignatureEvent {
            message_id: message_id.clone(),
            message,
        }
        .emit(&env);

        Ok(message_id)
    }

    fn max_gas_per_tx(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::MaxGasPerTx)
            .unwrap_or_default()
    }

    fn set_max_gas_per_tx(env: Env, max_gas_per_tx: u64) {
        Self::owner(&env).require_auth();

        env.storage()
            .instance()
            .set(&DataKey::MaxGasPerTx, &max_gas_per_tx);

        extend_instance_ttl(&env);

        MaxGasPerTxSetEvent { max_gas_per_tx }.emit(&env);
    }

    fn source_chain(env: &Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::SourceChain)
            .expect("source chain must be set during contract construction")
    }

    fn destination_chain(env: &Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::DestinationChain)
            .expect("destination chain must be set during contract construction")
    }

    fn execute_signatures(env: Env, message: Message, proof: Proof) -> Result<bool, ContractError> {
        ensure!(
            message.destination_chain == Self::source_chain(&env),
            ContractError::InvalidDestinationChain
        );
        ensure!(
            message.source_chain == Self::destination_chain(&env),
            ContractError::InvalidSourceChain
        );
        ensure!(
            !Self::is_message_relayed(&env, message.message_id.clone()),
            ContractError::MessageAlreadyProcessed
        );

        auth::validate_proof(&env, &message.execution_hash(&env), proof)?;

        let call_status = Self::call_executor(&env, &message);

        let key = DataKey::MessageRecord(message.message_id.clone());
        env.storage().persistent().set(
            &key,
            &MessageRecord {
                executed: true,
                call_status,
                sender: message.sender.clone(),
                receiver: message.executor.clone(),
                data_hash: message.data_hash(&env),
            },
        );
        extend_persistent_ttl(&env, &key);
        extend_instance_ttl(&env);

        if !call_status {
            log!(&env, "call of message {} failed", message.message_id);
        }

        RelayedMessageEvent {
            message_id: message.message_id,
            sender: message.sender,
            executor: message.executor,
            status: call_status,
        }
        .emit(&env);

        Ok(call_status)
    }

    fn message_call_status(env: &Env, message_id: BytesN<32>) -> bool {
        Self::message_record(env, message_id).is_some_and(|record| record.call_status)
    }

    fn failed_message_receiver(env: &Env, message_id: BytesN<32>) -> Option<Address> {
        Self::failed_message_record(env, message_id).map(|record| record.receiver)
    }

    fn failed_message_sender(env: &Env, message_id: BytesN<32>) -> Option<Address> {
        Self::failed_message_record(env, message_id).map(|record| record.sender)
    }

    fn failed_message_data_hash(env: &Env, message_id: BytesN<32>) -> Option<BytesN<32>> {
        Self::failed_message_record(env, message_id).map(|record| record.data_hash)
    }

    fn message_record(env: &Env, message_id: BytesN<32>) -> Option<MessageRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::MessageRecord(message_id))
    }

    fn is_message_relayed(env: &Env, message_id: BytesN<32>) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::MessageRecord(message_id))
    }

    fn rotate_signers(
        env: Env,
        signers: WeightedSigners,
        proof: Proof,
        bypass_rotation_delay: bool,
    ) -> Result<(), ContractError> {
        if bypass_rotation_delay {
            Self::operator(&env).require_auth();
        }

        let data_hash = signers.signers_rotation_hash(&env);
        let is_latest_signers = auth::validate_proof(&env, &data_hash, proof)?;
        is_latest_signers.then_ok((), ContractError::NotLatestSigners)?;

        auth::rotate_signers(&env, &signers, !bypass_rotation_delay)?;

        extend_instance_ttl(&env);

        Ok(())
    }

    fn epoch(env: &Env) -> u64 {
        auth::epoch(env)
    }

    fn epoch_by_signers_hash(env: &Env, signers_hash: BytesN<32>) -> Result<u64, ContractError> {
        auth::epoch_by_signers_hash(env, signers_hash)
    }

    fn signers_hash_by_epoch(env: &Env, epoch: u64) -> Result<BytesN<32>, ContractError> {
        auth::signers_hash_by_epoch(env, epoch)
    }
}
