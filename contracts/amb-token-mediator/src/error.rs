use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Upgradable
    MigrationNotAllowed = 1,
    /// Bridging
    InvalidAmount = 2,
    MediatorNotSet = 3,
    GasLimitExceeded = 4,
    InvalidMessageData = 5,
    /// Message execution
    InvalidSender = 6,
    /// Failed message fixes
    InvalidReceiver = 7,
    MessageNotFailed = 8,
    MessageAlreadyFixed = 9,
    UnknownMessage = 10,
}
