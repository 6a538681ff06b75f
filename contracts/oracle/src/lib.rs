#![no_std]

mod contract;
mod events;
mod gateway;
mod price;
mod storage;

pub use contract::{ PriceOracleGateway, PriceOracleGatewayClient };
pub use storage::{ Config, PriceState };
