use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ZeroAddress = 4,
    AllowanceExceeded = 5,
    DurationTooShort = 6,
    InsufficientRewardFunds = 7,
    MinimumDurationNotReached = 8,
    NothingStaked = 9,
    RewardPoolExhausted = 10,
    InvalidAmount = 11,
    Overflow = 12,
}

impl StakingError {
    /// Stable human-readable reason for the error code.
    pub fn message(&self) -> &'static str {
        match self {
            StakingError::NotInitialized => "Contract is not initialized.",
            StakingError::AlreadyInitialized => "Contract is already initialized.",
            StakingError::Unauthorized => "Ownable: caller is not the owner",
            StakingError::ZeroAddress => "Can not approve address zero.",
            StakingError::AllowanceExceeded => "Retrieval value exceed authorized limit.",
            StakingError::DurationTooShort => "Duration should be at least 1 week.",
            StakingError::InsufficientRewardFunds => "Not enough token to pay 2% reward.",
            StakingError::MinimumDurationNotReached => {
                "You can not withdraw until you staked for the minimum duration."
            }
            StakingError::NothingStaked => "Nothing staked.",
            StakingError::RewardPoolExhausted => "Reward pool can not cover the reward.",
            StakingError::InvalidAmount => "Amount has to be greater than zero.",
            StakingError::Overflow => "Arithmetic overflow.",
        }
    }
}
