#![no_std]

#[macro_use]
pub mod macros;

pub mod access;
pub mod constants;
pub mod error;
pub mod interfaces;
pub mod math;
pub mod request_id;
pub mod types;
pub mod utils;
