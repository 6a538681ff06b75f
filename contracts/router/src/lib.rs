#![no_std]

mod contract;
mod events;
mod freeze;
mod requests;
mod router;
mod storage;

pub use contract::{ RequestLedger, RequestLedgerClient };
pub use storage::{ Config, CorrelationRecord, FreezeWindow, State };

#[cfg(test)]
mod tests;
