#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(any(test, feature = "testutils"))]
#[macro_use]
extern crate std;

pub mod error;
pub mod executable;
pub mod types;

mod interface;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod test;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{AmbBridgeClient, AmbBridgeInterface};
    } else {
        mod auth;
        pub mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{AmbBridge, AmbBridgeClient, MIN_GAS_PER_CALL};
        pub use interface::AmbBridgeInterface;
    }
}
