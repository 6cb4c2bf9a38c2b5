use crate::interfaces::{
    self, MigratableInterface, OperatableInterface, OwnableInterface, UpgradableInterface,
};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, BytesN, Env, String,
};

#[contract]
pub struct Contract;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    MigrationNotAllowed = 1,
}

#[contracttype]
pub enum DataKey {
    MigrationData,
}

#[contractimpl]
impl Contract {
    pub fn __constructor(env: Env, owner: Option<Address>, operator: Option<Address>) {
        if let Some(owner) = owner {
            interfaces::set_owner(&env, &owner);
        }

        if let Some(operator) = operator {
            interfaces::set_operator(&env, &operator);
        }
    }

    pub fn migration_data(env: &Env) -> Option<String> {
        env.storage().instance().get(&DataKey::MigrationData)
    }
}

#[contractimpl]
impl OwnableInterface for Contract {
    fn owner(env: &Env) -> Address {
        interfaces::owner(env)
    }

    fn transfer_ownership(env: &Env, new_owner: Address) {
        interfaces::transfer_ownership::<Self>(env, new_owner);
    }
}

#[contractimpl]
impl OperatableInterface for Contract {
    fn operator(env: &Env) -> Address {
        interfaces::operator(env)
    }

    fn transfer_operatorship(env: &Env, new_operator: Address) {
        interfaces::transfer_operatorship::<Self>(env, new_operator);
    }
}

#[contractimpl]
impl UpgradableInterface for Contract {
    fn version(env: &Env) -> String {
        String::from_str(env, env!("CARGO_PKG_VERSION"))
    }

    fn upgrade(env: &Env, new_wasm_hash: BytesN<32>) {
        interfaces::upgrade::<Self>(env, new_wasm_hash);
    }
}

#[contractimpl]
impl MigratableInterface for Contract {
    type Error = ContractError;

    fn migrate(env: &Env, _migration_data: ()) -> Result<(), ContractError> {
        interfaces::migrate::<Self>(env, || {
            env.storage()
                .instance()
                .set(&DataKey::MigrationData, &String::from_str(env, "migrated"));
        })
        .map_err(|_| ContractError::MigrationNotAllowed)
    }
}
