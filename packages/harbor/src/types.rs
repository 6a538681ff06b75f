use soroban_sdk::{ contracttype, Address, String };

// ################################################################
//                           Validators
// ################################################################

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ValidatorStatus {
    Enabled = 0,
    Disabled = 1,
    /// accepts no new stake; positions may only migrate away or unstake
    Deprecated = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Validator {
    pub id: String,
    pub status: ValidatorStatus,
    pub total_delegated: i128,
    pub depositor_count: u32,
}

// ################################################################
//                           Positions
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub amount: i128,
    /// value of `amount` in the external unit at the time it was staked
    pub external_amount: i128,
    pub opened_at: u64,
    pub in_unstake: bool,
    pub unstake_initiated_at: u64,
    pub pending_unstake_amount: i128,
    /// request that set `in_unstake`; only its claim lifts the flag
    pub pending_unstake_id: Option<u128>,
    pub last_claim_initiated_at: u64,
}

impl Position {
    pub fn new(now: u64) -> Self {
        Position {
            amount: 0,
            external_amount: 0,
            opened_at: now,
            in_unstake: false,
            unstake_initiated_at: 0,
            pending_unstake_amount: 0,
            pending_unstake_id: None,
            last_claim_initiated_at: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0 && !self.in_unstake
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeRequest {
    pub id: u128,
    pub owner: Address,
    pub validator: String,
    pub amount: i128,
    pub requested_at: u64,
    pub unlock_time: u64,
    pub claimed: bool,
}

// ################################################################
//                             Vault
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRequest {
    pub id: u128,
    pub owner: Address,
    pub amount: i128,
    pub shares: i128,
    pub requested_at: u64,
    pub unlock_time: u64,
    pub claimed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WithdrawOutcome {
    /// assets paid out in the same call
    Immediate(i128),
    /// shares burned, assets released once the request unlocks
    Queued(WithdrawalRequest),
}

// ################################################################
//                             Oracle
// ################################################################

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PriceSource {
    Primary = 0,
    Fallback = 1,
    Unavailable = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceReading {
    pub price: i128,
    pub updated_at: u64,
    pub source: PriceSource,
}

impl PriceReading {
    pub fn unavailable() -> Self {
        PriceReading {
            price: 0,
            updated_at: 0,
            source: PriceSource::Unavailable,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.price > 0 && self.source != PriceSource::Unavailable
    }
}

// ################################################################
//                            Requests
// ################################################################

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RequestType {
    Stake = 1,
    Unstake = 2,
    ClaimRewards = 3,
    Withdraw = 4,
}

impl RequestType {
    pub fn tag(&self) -> u8 {
        *self as u32 as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(RequestType::Stake),
            2 => Some(RequestType::Unstake),
            3 => Some(RequestType::ClaimRewards),
            4 => Some(RequestType::Withdraw),
            _ => None,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RequestStatus {
    Pending = 0,
    Fulfilled = 1,
    Failed = 2,
}
