use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    Reentrancy = 4,
    OperationPaused = 5,

    // Validation
    InvalidAmount = 10,
    MalformedValidator = 11,
    UnknownValidator = 12,
    ValidatorNotEnabled = 13,
    ValidatorNotDeprecated = 14,
    ValidatorAlreadyExists = 15,
    InvalidStatus = 16,
    InvalidParameter = 17,
    SameValidator = 18,

    // Timing
    FreezeWindowActive = 20,
    StillUnbonding = 21,
    IntervalNotElapsed = 22,
    UnstakeInProcess = 23,

    // Consistency
    UnknownRequest = 30,
    RequestNotOwned = 31,
    AlreadyClaimed = 32,
    RequestNotPending = 33,
    WrongRequestType = 34,
    InsufficientPosition = 35,
    NoPosition = 36,
    NoEmergencyIntent = 37,
    NoRewards = 38,
    InsufficientShares = 39,
    InsufficientLiquidity = 40,
    InsufficientRewardReserve = 41,
    DuplicateRequest = 42,

    // External dependencies
    PriceUnavailable = 50,
    ImplausibleRate = 51,
    ImplausibleUnbondingPeriod = 52,
    RewardExceedsCeiling = 53,
    FutureTimestamp = 54,

    // Arithmetic
    MathError = 60,
    CastingFailure = 61,
}

pub type HarborResult<T = ()> = core::result::Result<T, ErrorCode>;
