#![cfg(test)]
extern crate std;

use crate::contract::AmbBridgeClient;
use crate::error::ContractError;
use crate::event::{MaxGasPerTxSetEvent, UserRequestForSignatureEvent};
use crate::storage_types::MessageIdKey;
use crate::testutils::{
    last_outbound_message, randint, setup_bridge, FOREIGN_CHAIN, HOME_CHAIN, MAX_GAS_PER_TX,
};
use crate::types::Message;
use amb_std::{
    assert_contract_err, assert_invocation, assert_invoke_auth_err, assert_invoke_auth_ok,
    assert_last_event,
};
use soroban_sdk::testutils::{Address as _, BytesN as _};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{bytes, Address, BytesN, Env, String};

fn setup_env<'a>() -> (Env, AmbBridgeClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();

    let (_, client) = setup_bridge(&env, HOME_CHAIN, FOREIGN_CHAIN, randint(0, 10), randint(1, 10));

    (env, client)
}

fn expected_message_id(env: &Env, nonce: u64) -> BytesN<32> {
    env.crypto()
        .keccak256(
            &MessageIdKey {
                source_chain: String::from_str(env, HOME_CHAIN),
                nonce,
            }
            .to_xdr(env),
        )
        .into()
}

#[test]
fn constructor_sets_configuration() {
    let (env, client) = setup_env();

    assert_eq!(client.source_chain(), String::from_str(&env, HOME_CHAIN));
    assert_eq!(
        client.destination_chain(),
        String::from_str(&env, FOREIGN_CHAIN)
    );
    assert_eq!(client.max_gas_per_tx(), MAX_GAS_PER_TX);
    assert_eq!(client.epoch(), 1);
}

#[test]
fn require_to_pass_message_emits_request_for_signature() {
    let (env, client) = setup_env();

    let sender = Address::generate(&env);
    let executor = Address::generate(&env);
    let data = bytes!(&env, 0xdeadbeef);
    let gas = 50_000u64;

    let message_id = client.require_to_pass_message(&sender, &executor, &data, &gas);

    assert_eq!(message_id, expected_message_id(&env, 0));

    let message = Message {
        message_id: message_id.clone(),
        source_chain: String::from_str(&env, HOME_CHAIN),
        destination_chain: String::from_str(&env, FOREIGN_CHAIN),
        sender: sender.clone(),
        executor: executor.clone(),
        gas_limit: gas,
        data: data.clone(),
    };

    assert_last_event(
        &env,
        &client.address,
        UserRequestForSignatureEvent {
            message_id,
            message: message.clone(),
        },
    );

    assert_invocation(
        &env,
        &sender,
        &client.address,
        "require_to_pass_message",
        (sender.clone(), executor, data, gas),
    );

    assert_eq!(last_outbound_message(&env, &client.address), message);
}

#[test]
fn message_ids_are_unique_per_request() {
    let (env, client) = setup_env();

    let sender = Address::generate(&env);
    let executor = Address::generate(&env);
    let data = bytes!(&env, 0x01);

    let first = client.require_to_pass_message(&sender, &executor, &data, &1);
    let second = client.require_to_pass_message(&sender, &executor, &data, &1);

    assert_ne!(first, second);
    assert_eq!(second, expected_message_id(&env, 1));
}

#[test]
fn require_to_pass_message_fails_above_max_gas_per_tx() {
    let (env, client) = setup_env();

    assert_contract_err!(
        client.try_require_to_pass_message(
            &Address::generate(&env),
            &Address::generate(&env),
            &bytes!(&env, 0x01),
            &(MAX_GAS_PER_TX + 1)
        ),
        ContractError::GasLimitExceeded
    );
}

#[test]
fn require_to_pass_message_requires_sender_auth() {
    let env = Env::default();
    let (_, client) = setup_bridge(&env, HOME_CHAIN, FOREIGN_CHAIN, 0, 1);

    let sender = Address::generate(&env);
    let executor = Address::generate(&env);
    let data = bytes!(&env, 0x01);
    let gas = 1u64;

    assert_invoke_auth_err!(
        Address::generate(&env),
        client.try_require_to_pass_message(&sender, &executor, &data, &gas)
    );
}

#[test]
fn set_max_gas_per_tx_is_owner_only() {
    let env = Env::default();
    let (_, client) = setup_bridge(&env, HOME_CHAIN, FOREIGN_CHAIN, 0, 1);
    let new_max = 100_000u64;

    assert_invoke_auth_err!(
        Address::generate(&env),
        client.try_set_max_gas_per_tx(&new_max)
    );

    let owner = client.owner();
    assert_invoke_auth_ok!(owner, client.try_set_max_gas_per_tx(&new_max));

    assert_last_event(
        &env,
        &client.address,
        MaxGasPerTxSetEvent {
            max_gas_per_tx: new_max,
        },
    );
    assert_eq!(client.max_gas_per_tx(), new_max);
}

#[test]
fn unknown_message_has_no_record() {
    let (env, client) = setup_env();
    let message_id = BytesN::<32>::random(&env);

    assert!(!client.message_call_status(&message_id));
    assert!(!client.is_message_relayed(&message_id));
    assert_eq!(client.message_record(&message_id), None);
    assert_eq!(client.failed_message_receiver(&message_id), None);
    assert_eq!(client.failed_message_sender(&message_id), None);
    assert_eq!(client.failed_message_data_hash(&message_id), None);
}

#[test]
fn signers_hash_by_epoch_fails_for_unknown_epoch() {
    let (_, client) = setup_env();

    assert_contract_err!(
        client.try_signers_hash_by_epoch(&2),
        ContractError::InvalidEpoch
    );
}
