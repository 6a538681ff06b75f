// Ledger TTLs, roughly 5s per ledger
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Time (seconds)
pub const ONE_HOUR: u64 = 3_600;
pub const ONE_DAY: u64 = 86_400;
pub const ONE_WEEK: u64 = 7 * ONE_DAY;
pub const SECONDS_PER_YEAR: u64 = 365 * ONE_DAY;

// Rates
pub const BPS_DENOMINATOR: i128 = 10_000;
pub const MAX_BPS: u32 = 10_000;
/// Anything above 50% a year is treated as a corrupted feed.
pub const MAX_RATE_BPS: u32 = 5_000;
pub const DEFAULT_REWARD_CEILING_BPS: u32 = 2_500;
pub const MAX_REWARD_CEILING_BPS: u32 = 2_500;

// Oracle
pub const DEFAULT_FRESHNESS_THRESHOLD: u64 = ONE_HOUR;

// Unbonding
pub const MIN_UNBONDING_PERIOD: u64 = 1;
pub const MAX_UNBONDING_PERIOD: u64 = 90 * ONE_DAY;
pub const DEFAULT_UNBONDING_PERIOD: u64 = 21 * ONE_DAY;

// Direct ledger
pub const MIN_MIGRATION_DELAY: u64 = 1;
pub const MAX_VALIDATOR_REF_LEN: u32 = 64;

// Router
pub const DEFAULT_MIN_CLAIM_INTERVAL: u64 = ONE_DAY;
