//! Derive macros wiring the default implementations of the `amb_std::interfaces`
//! traits into a contract.

use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implements the `OwnableInterface` for a contract, backed by `amb_std::interfaces::owner`.
#[proc_macro_derive(Ownable)]
pub fn derive_ownable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    ownable(&input.ident).into()
}

/// Implements the `OperatableInterface` for a contract, backed by `amb_std::interfaces::operator`.
#[proc_macro_derive(Operatable)]
pub fn derive_operatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    operatable(&input.ident).into()
}

/// Implements the `UpgradableInterface` and `MigratableInterface` for a contract.
///
/// The contract must also derive `Ownable`, define `ContractError::MigrationNotAllowed`
/// and an associated `fn run_migration(env: &Env, migration_data: ())`.
#[proc_macro_derive(Upgradable)]
pub fn derive_upgradable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    upgradable(&input.ident).into()
}

fn ownable(name: &Ident) -> TokenStream2 {
    quote! {
        use amb_std::interfaces::OwnableInterface as _;

        #[soroban_sdk::contractimpl]
        impl amb_std::interfaces::OwnableInterface for #name {
            fn owner(env: &soroban_sdk::Env) -> soroban_sdk::Address {
                amb_std::interfaces::owner(env)
            }

            fn transfer_ownership(env: &soroban_sdk::Env, new_owner: soroban_sdk::Address) {
                amb_std::interfaces::transfer_ownership::<Self>(env, new_owner);
            }
        }
    }
}

fn operatable(name: &Ident) -> TokenStream2 {
    quote! {
        use amb_std::interfaces::OperatableInterface as _;

        #[soroban_sdk::contractimpl]
        impl amb_std::interfaces::OperatableInterface for #name {
            fn operator(env: &soroban_sdk::Env) -> soroban_sdk::Address {
                amb_std::interfaces::operator(env)
            }

            fn transfer_operatorship(env: &soroban_sdk::Env, new_operator: soroban_sdk::Address) {
                amb_std::interfaces::transfer_operatorship::<Self>(env, new_operator);
            }
        }
    }
}

fn upgradable(name: &Ident) -> TokenStream2 {
    quote! {
        use amb_std::interfaces::{MigratableInterface as _, UpgradableInterface as _};

        #[soroban_sdk::contractimpl]
        impl amb_std::interfaces::UpgradableInterface for #name {
            fn version(env: &soroban_sdk::Env) -> soroban_sdk::String {
                soroban_sdk::String::from_str(env, env!("CARGO_PKG_VERSION"))
            }

            fn upgrade(env: &soroban_sdk::Env, new_wasm_hash: soroban_sdk::BytesN<32>) {
                amb_std::interfaces::upgrade::<Self>(env, new_wasm_hash);
            }
        }

        #[soroban_sdk::contractimpl]
        impl amb_std::interfaces::MigratableInterface for #name {
            type Error = ContractError;

            fn migrate(env: &soroban_sdk::Env, migration_data: ()) -> Result<(), ContractError> {
                amb_std::interfaces::migrate::<Self>(env, || Self::run_migration(env, migration_data))
                    .map_err(|_| ContractError::MigrationNotAllowed)
            }
        }
    }
}
