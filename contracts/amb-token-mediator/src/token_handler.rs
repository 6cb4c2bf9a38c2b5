use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

use crate::types::TokenManagerType;

/// Moves `amount` out of `sender`'s balance: burned for mint/burn tokens, locked in the mediator otherwise.
pub fn take_token(
    env: &Env,
    sender: &Address,
    token_address: &Address,
    token_manager_type: TokenManagerType,
    amount: i128,
) {
    let token = TokenClient::new(env, token_address);

    match token_manager_type {
        TokenManagerType::MintBurn => token.burn(sender, &amount),
        TokenManagerType::LockUnlock => {
            token.transfer(sender, &env.current_contract_address(), &amount)
        }
    }
}

pub fn give_token(
    env: &Env,
    recipient: &Address,
    token_address: &Address,
    token_manager_type: TokenManagerType,
    amount: i128,
) {
    match token_manager_type {
        TokenManagerType::MintBurn => {
            StellarAssetClient::new(env, token_address).mint(recipient, &amount)
        }
        TokenManagerType::LockUnlock => TokenClient::new(env, token_address).transfer(
            &env.current_contract_address(),
            recipient,
            &amount,
        ),
    }
}
