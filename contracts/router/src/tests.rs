mod admin;
mod direct;
mod freeze;
mod rewards;
mod vault;
