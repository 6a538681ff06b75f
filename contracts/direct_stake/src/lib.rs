#![no_std]

mod contract;
mod controller;
mod events;
mod ledger;
mod storage;

pub use contract::{ DirectStakeLedger, DirectStakeLedgerClient };
pub use storage::{ Config, Totals };
