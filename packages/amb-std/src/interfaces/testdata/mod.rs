#![cfg(test)]
#![allow(clippy::redundant_pub_crate)] // contract macro generates pub types

mod contract;

pub use contract::*;
