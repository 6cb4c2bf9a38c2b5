use crate::ensure;
use crate::events::Event;
use crate::interfaces::{storage, OwnableInterface};
use core::fmt::Debug;
use soroban_sdk::{contractclient, symbol_short, BytesN, Env, IntoVal, String, Topics, Val};

#[contractclient(name = "UpgradableClient")]
pub trait UpgradableInterface: OwnableInterface {
    /// Returns the current version of the contract.
    fn version(env: &Env) -> String;

    /// Upgrades the contract to a new WASM hash.
    fn upgrade(env: &Env, new_wasm_hash: BytesN<32>);
}

pub trait MigratableInterface: UpgradableInterface {
    /// Error type returned if the migration fails.
    type Error: Into<soroban_sdk::Error>;

    /// Migrates contract state after upgrading the contract code.
    fn migrate(env: &Env, migration_data: ()) -> Result<(), Self::Error>;
}

/// This function checks that the caller can authenticate as the owner of the contract,
/// then upgrades the contract to a new WASM hash and prepares it for migration.
pub fn upgrade<T: OwnableInterface>(env: &Env, new_wasm_hash: BytesN<32>) {
    T::owner(env).require_auth();

    env.deployer().update_current_contract_wasm(new_wasm_hash);
    start_migration(env);
}

/// This function checks that the caller can authenticate as the owner of the contract,
/// then runs the custom_migration and finalizes the migration.
/// An event is emitted when the migration, and with it the overall upgrade, is complete.
/// Migration can only be run once, after the [upgrade] function has been called.
pub fn migrate<T: UpgradableInterface>(
    env: &Env,
    custom_migration: impl FnOnce(),
) -> Result<(), MigrationError> {
    T::owner(env).require_auth();

    ensure_is_migrating(env)?;

    custom_migration();
    complete_migration(env);

    UpgradedEvent {
        version: T::version(env),
    }
    .emit(env);

    Ok(())
}

pub(crate) fn start_migration(env: &Env) {
    env.storage()
        .instance()
        .set(&storage::migrating::DataKey::Interfaces_Migrating, &());
}

fn ensure_is_migrating(env: &Env) -> Result<(), MigrationError> {
    ensure!(
        env.storage()
            .instance()
            .has(&storage::migrating::DataKey::Interfaces_Migrating),
        MigrationError::NotAllowed
    );

    Ok(())
}

fn complete_migration(env: &Env) {
    env.storage()
        .instance()
        .remove(&storage::migrating::DataKey::Interfaces_Migrating);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpgradedEvent {
    pub version: String,
}

impl Event for UpgradedEvent {
    fn topics(&self, _env: &Env) -> impl Topics + Debug {
        (symbol_short!("upgraded"),)
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.version.clone(),)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MigrationError {
    NotAllowed,
}
