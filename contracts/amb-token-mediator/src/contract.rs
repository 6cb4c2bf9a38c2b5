use crate::error::ContractError;
use crate::event::{
    FailedMessageFixRequestedEvent, FailedMessageFixedEvent, MediatorContractSetEvent,
    RequestGasLimitSetEvent, TokensBridgedEvent, TokensBridgingInitiatedEvent,
};
use crate::interface::AmbTokenMediatorInterface;
use crate::storage_types::DataKey;
use crate::token_handler;
use crate::types::{FixRecord, MediatorMessage, TokenManagerType};
use amb_bridge::executable::AmbExecutableInterface;
use amb_bridge::types::MessageContext;
use amb_bridge::AmbBridgeClient;
use amb_std::events::Event;
use amb_std::interfaces::OwnableInterface;
use amb_std::ttl::{extend_instance_ttl, extend_persistent_ttl};
use amb_std::{ensure, interfaces, Ownable, Upgradable};
use soroban_sdk::xdr::FromXdr;
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Bytes, BytesN, Env};

#[contract]
#[derive(Ownable, Upgradable)]
pub struct AmbTokenMediator;

#[contractimpl]
impl AmbTokenMediator {
    pub fn __constructor(
        env: Env,
        owner: Address,
        bridge: Address,
        token: Address,
        token_manager_type: TokenManagerType,
        request_gas_limit: u64,
    ) -> Result<(), ContractError> {
        ensure!(
            request_gas_limit <= AmbBridgeClient::new(&env, &bridge).max_gas_per_tx(),
            ContractError::GasLimitExceeded
        );

        interfaces::set_owner(&env, &owner);

        env.storage().instance().set(&DataKey::Bridge, &bridge);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage()
            .instance()
            .set(&DataKey::TokenManagerType, &token_manager_type);
        env.storage()
            .instance()
            .set(&DataKey::RequestGasLimit, &request_gas_limit);

        Ok(())
    }
}

impl AmbTokenMediator {
    // Modify this function to add migration logic
    const fn run_migration(_env: &Env, _migration_data: ()) {}

    fn bridge_client(env: &Env) -> AmbBridgeClient<'_> {
        AmbBridgeClient::new(env, &Self::bridge(env))
    }

    fn counterpart(env: &Env) -> Result<Address, ContractError> {
        Self::mediator_on_other_side(env).ok_or(ContractError::MediatorNotSet)
    }

    fn next_nonce(env: &Env) -> u64 {
        let nonce: u64 = env.storage().instance().get(&DataKey::Nonce).unwrap_or(0);
        env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));

        nonce
    }

    /// Takes the tokens of `from` and sends the transfer to the mediator on the other side.
    /// The transfer is recorded under its data hash so it can be given back if it fails there.
    fn bridge_tokens(
        env: &Env,
        from: Address,
        receiver: Address,
        value: i128,
    ) -> Result<BytesN<32>, ContractError> {
        ensure!(value > 0, ContractError::InvalidAmount);

        let mediator = Self::counterpart(env)?;

        token_handler::take_token(
            env,
            &from,
            &Self::token(env),
            Self::token_manager_type(env),
            value,
        );

        let data =
            MediatorMessage::HandleBridgedTokens(receiver.clone(), value, Self::next_nonce(env))
                .encode(env);
        let data_hash: BytesN<32> = env.crypto().keccak256(&data).into();

        let key = DataKey::FixRecord(data_hash);
        env.storage().persistent().set(
            &key,
            &FixRecord {
                fixed: false,
                recipient: from.clone(),
                value,
            },
        );
        extend_persistent_ttl(env, &key);

        let message_id = Self::bridge_client(env).require_to_pass_message(
            &env.current_contract_address(),
            &mediator,
            &data,
            &Self::request_gas_limit(env),
        );

        extend_instance_ttl(env);

        TokensBridgingInitiatedEvent {
            message_id: message_id.clone(),
            sender: from,
            receiver,
            value,
        }
        .emit(env);

        Ok(message_id)
    }

    fn execute(env: &Env, context: MessageContext, data: Bytes) -> Result<(), ContractError> {
        ensure!(
            context.sender == Self::counterpart(env)?,
            ContractError::InvalidSender
        );

        match MediatorMessage::decode(env, &data)? {
            MediatorMessage::HandleBridgedTokens(recipient, value, _) => {
                Self::handle_bridged_tokens(env, context.message_id, recipient, value)
            }
            MediatorMessage::FixFailedMessage(data_hash) => {
                Self::fix_failed_message(env, data_hash)
            }
        }
    }

    fn handle_bridged_tokens(
        env: &Env,
        message_id: BytesN<32>,
        recipient: Address,
        value: i128,
    ) -> Result<(), ContractError> {
        ensure!(value > 0, ContractError::InvalidAmount);

        token_handler::give_token(
            env,
            &recipient,
            &Self::token(env),
            Self::token_manager_type(env),
            value,
        );

        TokensBridgedEvent {
            message_id,
            recipient,
            value,
        }
        .emit(env);

        Ok(())
    }

    fn fix_failed_message(env: &Env, data_hash: BytesN<32>) -> Result<(), ContractError> {
        let key = DataKey::FixRecord(data_hash.clone());

        let mut record: FixRecord = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::UnknownMessage)?;

        ensure!(!record.fixed, ContractError::MessageAlreadyFixed);

        record.fixed = true;
        env.storage().persistent().set(&key, &record);
        extend_persistent_ttl(env, &key);

        token_handler::give_token(
            env,
            &record.recipient,
            &Self::token(env),
            Self::token_manager_type(env),
            record.value,
        );

        FailedMessageFixedEvent {
            data_hash,
            recipient: record.recipient,
            value: record.value,
        }
        .emit(env);

        Ok(())
    }
}

#[contractimpl]
impl AmbExecutableInterface for AmbTokenMediator {
    fn bridge(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Bridge)
            .expect("bridge must be set during contract construction")
    }

    fn execute_message(env: Env, context: MessageContext, data: Bytes) {
        Self::validate(&env);

        if let Err(error) = Self::execute(&env, context, data) {
            log!(&env, "mediator message rejected with error {}", error as u32);
            panic_with_error!(&env, error);
        }

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl AmbTokenMediatorInterface for AmbTokenMediator {
    fn token(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .expect("token must be set during contract construction")
    }

    fn token_manager_type(env: &Env) -> TokenManagerType {
        env.storage()
            .instance()
            .get(&DataKey::TokenManagerType)
            .expect("token manager type must be set during contract construction")
    }

    fn mediator_on_other_side(env: &Env) -> Option<Address> {
        env.storage()
            .instance()
            .get(&DataKey::MediatorOnOtherSide)
    }

    fn set_mediator_on_other_side(env: Env, mediator: Address) {
        Self::owner(&env).require_auth();

        env.storage()
            .instance()
            .set(&DataKey::MediatorOnOtherSide, &mediator);

        extend_instance_ttl(&env);

        MediatorContractSetEvent { mediator }.emit(&env);
    }

    fn request_gas_limit(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::RequestGasLimit)
            .unwrap_or_default()
    }

    fn set_request_gas_limit(env: Env, request_gas_limit: u64) -> Result<(), ContractError> {
        Self::owner(&env).require_auth();

        ensure!(
            request_gas_limit <= Self::bridge_client(&env).max_gas_per_tx(),
            ContractError::GasLimitExceeded
        );

        env.storage()
            .instance()
            .set(&DataKey::RequestGasLimit, &request_gas_limit);

        extend_instance_ttl(&env);

        RequestGasLimitSetEvent { request_gas_limit }.emit(&env);

        Ok(())
    }

    fn on_token_transfer(
        env: Env,
        from: Address,
        value: i128,
        data: Bytes,
    ) -> Result<bool, ContractError> {
        from.require_auth();

        let receiver = if data.is_empty() {
            from.clone()
        } else {
            Address::from_xdr(&env, &data).map_err(|_| ContractError::InvalidMessageData)?
        };

        Self::bridge_tokens(&env, from, receiver, value)?;

        Ok(true)
    }

    fn relay_tokens(
        env: Env,
        from: Address,
        receiver: Address,
        value: i128,
    ) -> Result<BytesN<32>, ContractError> {
        from.require_auth();

        Self::bridge_tokens(&env, from, receiver, value)
    }

    fn request_failed_message_fix(
        env: Env,
        message_id: BytesN<32>,
    ) -> Result<BytesN<32>, ContractError> {
        let bridge = Self::bridge_client(&env);

        ensure!(
            !bridge.message_call_status(&message_id),
            ContractError::MessageNotFailed
        );

        let receiver = bridge
            .failed_message_receiver(&message_id)
            .ok_or(ContractError::MessageNotFailed)?;
        ensure!(
            receiver == env.current_contract_address(),
            ContractError::InvalidReceiver
        );

        let sender = bridge
            .failed_message_sender(&message_id)
            .ok_or(ContractError::MessageNotFailed)?;
        let mediator = Self::counterpart(&env)?;
        ensure!(sender == mediator, ContractError::InvalidSender);

        let data_hash = bridge
            .failed_message_data_hash(&message_id)
            .ok_or(ContractError::MessageNotFailed)?;

        let data = MediatorMessage::FixFailedMessage(data_hash.clone()).encode(&env);

        let fix_message_id = bridge.require_to_pass_message(
            &env.current_contract_address(),
            &mediator,
            &data,
            &Self::request_gas_limit(&env),
        );

        extend_instance_ttl(&env);

        FailedMessageFixRequestedEvent {
            message_id,
            fix_message_id: fix_message_id.clone(),
            data_hash,
        }
        .emit(&env);

        Ok(fix_message_id)
    }

    fn message_fixed(env: &Env, data_hash: BytesN<32>) -> bool {
        Self::fix_record(env, data_hash).is_some_and(|record| record.fixed)
    }

    fn fix_record(env: &Env, data_hash: BytesN<32>) -> Option<FixRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::FixRecord(data_hash))
    }
}
