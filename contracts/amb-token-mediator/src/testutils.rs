#![cfg(any(test, feature = "testutils"))]

use crate::contract::{AmbTokenMediator, AmbTokenMediatorClient};
use crate::types::{MediatorMessage, TokenManagerType};
use amb_bridge::testutils::{FOREIGN_CHAIN, HOME_CHAIN};
use amb_bridge::types::Message;
use soroban_sdk::testutils::{Address as _, BytesN as _};
use soroban_sdk::{Address, BytesN, Env, String};

pub const REQUEST_GAS_LIMIT: u64 = 50_000;

pub fn setup_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone())
        .address()
}

pub fn setup_mediator<'a>(
    env: &Env,
    bridge: &Address,
    token: &Address,
    token_manager_type: TokenManagerType,
) -> AmbTokenMediatorClient<'a> {
    let owner = Address::generate(env);

    let contract_id = env.register(
        AmbTokenMediator,
        (
            owner,
            bridge.clone(),
            token.clone(),
            token_manager_type,
            REQUEST_GAS_LIMIT,
        ),
    );

    AmbTokenMediatorClient::new(env, &contract_id)
}

/// Builds a message from the foreign chain carrying `message` to the mediator on a home chain bridge.
pub fn inbound_message(
    env: &Env,
    mediator: &Address,
    sender: &Address,
    message: &MediatorMessage,
    gas_limit: u64,
) -> Message {
    Message {
        message_id: BytesN::<32>::random(env),
        source_chain: String::from_str(env, FOREIGN_CHAIN),
        destination_chain: String::from_str(env, HOME_CHAIN),
        sender: sender.clone(),
        executor: mediator.clone(),
        gas_limit,
        data: message.encode(env),
    }
}
