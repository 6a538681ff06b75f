#![no_std]

mod allowance;
mod balance;
mod contract;
mod events;
mod math;
mod storage;
mod vault;

pub use contract::{ CompoundingVault, CompoundingVaultClient };
pub use storage::{ Config, VaultState };
