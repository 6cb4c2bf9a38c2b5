#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(any(test, feature = "testutils"))]
#[macro_use]
extern crate std;

pub mod error;
pub mod types;

mod interface;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{AmbTokenMediatorClient, AmbTokenMediatorInterface};
    } else {
        pub mod event;
        mod storage_types;
        mod token_handler;

        pub mod contract;
        pub use contract::{AmbTokenMediator, AmbTokenMediatorClient};
        pub use interface::AmbTokenMediatorInterface;
    }
}
