//! Reward arithmetic.
//!
//! A position earns `REWARD_RATE_PERCENT` of its principal for every full
//! `duration` it stays staked, prorated linearly by the second and floored:
//!
//! ```text
//! reward = floor(elapsed * 2 * staked / (duration * 100))
//! ```
//!
//! There is no cap: staking for twice the duration earns twice the rate.
//! Deposits are only admitted while custody can cover every outstanding
//! principal plus one period's reward on the new deposit.

use crate::errors::StakingError;

/// Reward paid per full staking period, in percent of the principal.
pub const REWARD_RATE_PERCENT: i128 = 2;

/// Reward accrued by `staked` over `elapsed` seconds.
pub fn accrued(staked: i128, elapsed: u64, duration: u64) -> Result<i128, StakingError> {
    let numerator = (elapsed as i128)
        .checked_mul(REWARD_RATE_PERCENT)
        .and_then(|x| x.checked_mul(staked))
        .ok_or(StakingError::Overflow)?;
    let denominator = (duration as i128)
        .checked_mul(100)
        .ok_or(StakingError::Overflow)?;
    if denominator == 0 {
        return Err(StakingError::DurationTooShort);
    }
    Ok(numerator / denominator)
}

/// One period's reward on `amount`.
pub fn period_reward(amount: i128) -> Result<i128, StakingError> {
    amount
        .checked_mul(REWARD_RATE_PERCENT)
        .map(|x| x / 100)
        .ok_or(StakingError::Overflow)
}

/// Balance custody must already hold before accepting `amount` on top of
/// `total_staked`.
pub fn required_custody(total_staked: i128, amount: i128) -> Result<i128, StakingError> {
    total_staked
        .checked_add(amount)
        .and_then(|x| x.checked_add(period_reward(amount).ok()?))
        .ok_or(StakingError::Overflow)
}
