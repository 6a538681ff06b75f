use harbor::{
    error::HarborResult,
    math::{ accrue_simple, apply_bps, mul_div_floor, safe_math::SafeMath },
};
use soroban_sdk::Env;

use crate::storage::VaultState;

/// Snapshot of the pool at one instant
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Asset balance held by the vault, reserved part included
    pub physical: i128,
    pub reserved: i128,
    pub accrued_virtual: i128,
    /// Accrual since the last sync, not yet folded into `accrued_virtual`
    pub implied: i128,
    pub total_shares: i128,
}

impl Pool {
    pub fn new(
        env: &Env,
        state: &VaultState,
        physical: i128,
        apy_bps: u32,
        now: u64
    ) -> HarborResult<Self> {
        let free = physical.saturating_sub(state.reserved).max(0);
        let base = free.safe_add(state.accrued_virtual, env)?;
        let elapsed = now.saturating_sub(state.last_sync);

        // nothing accrues for an empty pool
        let implied = if state.total_shares == 0 {
            0
        } else {
            accrue_simple(env, base, apy_bps, elapsed)?
        };

        Ok(Pool {
            physical,
            reserved: state.reserved,
            accrued_virtual: state.accrued_virtual,
            implied,
            total_shares: state.total_shares,
        })
    }

    pub fn free(&self) -> i128 {
        self.physical.saturating_sub(self.reserved).max(0)
    }

    /// `(physical - reserved) + accrued_virtual + implied`
    pub fn total_assets(&self, env: &Env) -> HarborResult<i128> {
        self.free().safe_add(self.accrued_virtual, env)?.safe_add(self.implied, env)
    }

    /// Shares minted for `assets`, 1:1 while the vault is empty
    pub fn shares_for(&self, env: &Env, assets: i128) -> HarborResult<i128> {
        let total_assets = self.total_assets(env)?;
        if self.total_shares == 0 || total_assets == 0 {
            return Ok(assets);
        }
        mul_div_floor(env, assets, self.total_shares, total_assets)
    }

    /// Assets redeemable for `shares`
    pub fn assets_for(&self, env: &Env, shares: i128) -> HarborResult<i128> {
        if self.total_shares == 0 {
            return Ok(shares);
        }
        mul_div_floor(env, shares, self.total_assets(env)?, self.total_shares)
    }

    /// Largest redemption, in assets, served without queueing
    pub fn instant_cap(&self, env: &Env, liquidity_bps: u32) -> HarborResult<i128> {
        apply_bps(env, self.free(), liquidity_bps)
    }
}
