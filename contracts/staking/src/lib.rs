//! # Staking
//!
//! Custodies stakes of a single token and pays a linearly accruing reward
//! out of a pool. The pool is filled by accounts the administrator has
//! granted a one-shot allowance; stakers lock principal for at least
//! `duration` seconds and leave with principal plus reward in one withdrawal.

#![no_std]

mod errors;
mod events;
mod reward;
mod storage;

pub use errors::StakingError;
pub use reward::REWARD_RATE_PERCENT;
pub use storage::StakeAccount;

use events::{
    AdminChangedEvent, DurationChangedEvent, InitializedEvent, RewardAddedEvent,
    RewardApprovedEvent, StakeDepositedEvent, StakeWithdrawnEvent,
};
use ledger_common::{access, clock, custody};
use soroban_sdk::{contract, contractimpl, log, Address, Env};

/// Shortest staking period the administrator may configure.
pub const MIN_DURATION: u64 = clock::WEEK;
/// Staking period until the administrator changes it.
pub const DEFAULT_DURATION: u64 = 4 * clock::WEEK;

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    /// Initialize the contract with an admin address and token address
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), StakingError> {
        // Check if already initialized
        if storage::is_initialized(&env) {
            return Err(StakingError::AlreadyInitialized);
        }

        // Require admin authorization
        admin.require_auth();

        storage::init(&env, &admin, &token, DEFAULT_DURATION);

        InitializedEvent { admin, token }.publish(&env);
        Ok(())
    }

    /// Let `account` move up to `amount` into the reward pool. Replaces any
    /// previous allowance.
    pub fn approve_reward(
        env: Env,
        admin: Address,
        account: Address,
        amount: i128,
    ) -> Result<(), StakingError> {
        Self::require_admin(&env, &admin)?;

        // Validate grantee and amount
        if access::is_zero_account(&env, &account) {
            return Err(StakingError::ZeroAddress);
        }
        if amount < 0 {
            return Err(StakingError::InvalidAmount);
        }

        storage::set_allowance(&env, &account, amount);

        RewardApprovedEvent { account, amount }.publish(&env);
        Ok(())
    }

    /// Move `amount` from `funder` into the reward pool, spending allowance.
    pub fn add_reward(env: Env, funder: Address, amount: i128) -> Result<i128, StakingError> {
        // Check if contract is initialized
        let token = storage::token(&env)?;

        // Require funder authorization
        funder.require_auth();

        let allowance = storage::allowance(&env, &funder);
        if amount > allowance {
            return Err(StakingError::AllowanceExceeded);
        }
        if amount <= 0 {
            return Err(StakingError::InvalidAmount);
        }

        let reward_total = storage::reward_total(&env)
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;

        // Transfer tokens from funder into the pool
        custody::transfer_in(&env, &token, &funder, amount);

        storage::set_reward_total(&env, reward_total);
        storage::set_allowance(&env, &funder, allowance - amount);

        RewardAddedEvent {
            funder,
            amount,
            reward_total,
        }
        .publish(&env);

        Ok(reward_total)
    }

    /// Change the minimum staking period, which is also the period the
    /// reward rate is quoted over.
    pub fn set_duration(env: Env, admin: Address, duration: u64) -> Result<(), StakingError> {
        Self::require_admin(&env, &admin)?;

        if duration < MIN_DURATION {
            return Err(StakingError::DurationTooShort);
        }

        let old_duration = storage::duration(&env)?;
        storage::set_duration(&env, duration);

        DurationChangedEvent {
            old_duration,
            new_duration: duration,
        }
        .publish(&env);
        Ok(())
    }

    /// Stake `amount`. Restarts the staking clock for the whole position.
    ///
    /// Custody has to hold every outstanding principal plus this deposit and
    /// its one-period reward before the deposit is taken in, whoever funded
    /// the pool.
    pub fn deposit(env: Env, staker: Address, amount: i128) -> Result<(), StakingError> {
        // Check if contract is initialized
        let token = storage::token(&env)?;

        // Require staker authorization
        staker.require_auth();

        if amount <= 0 {
            return Err(StakingError::InvalidAmount);
        }

        // Check the pool can pay this deposit's reward
        let total_staked = storage::total_staked(&env);
        let required = reward::required_custody(total_staked, amount)?;
        if custody::custody_balance(&env, &token) < required {
            return Err(StakingError::InsufficientRewardFunds);
        }

        let mut stake = storage::stake(&env, &staker);
        stake.staked_amount = stake
            .staked_amount
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;
        stake.last_deposit_time = clock::now(&env);

        // Transfer tokens from staker to contract
        custody::transfer_in(&env, &token, &staker, amount);

        storage::set_total_staked(&env, total_staked + amount);
        storage::save_stake(&env, &staker, &stake);

        StakeDepositedEvent {
            staker,
            amount,
            staked_amount: stake.staked_amount,
            timestamp: stake.last_deposit_time,
        }
        .publish(&env);

        Ok(())
    }

    /// Close the caller's position and pay out principal plus reward.
    pub fn withdraw(env: Env, staker: Address) -> Result<i128, StakingError> {
        // Check if contract is initialized
        let token = storage::token(&env)?;

        // Require staker authorization
        staker.require_auth();

        let stake = storage::stake(&env, &staker);
        if stake.staked_amount <= 0 {
            return Err(StakingError::NothingStaked);
        }

        let duration = storage::duration(&env)?;
        let elapsed = clock::elapsed_since(&env, stake.last_deposit_time);
        if elapsed < duration {
            return Err(StakingError::MinimumDurationNotReached);
        }

        let reward = reward::accrued(stake.staked_amount, elapsed, duration)?;
        let reward_total = storage::reward_total(&env);
        if reward > reward_total {
            return Err(StakingError::RewardPoolExhausted);
        }
        let payout = stake
            .staked_amount
            .checked_add(reward)
            .ok_or(StakingError::Overflow)?;

        // Close the position before paying out
        storage::set_total_staked(&env, storage::total_staked(&env) - stake.staked_amount);
        storage::set_reward_total(&env, reward_total - reward);
        storage::save_stake(&env, &staker, &StakeAccount::default());

        custody::transfer_out(&env, &token, &staker, payout);

        log!(&env, "stake withdrawn", stake.staked_amount, reward);
        StakeWithdrawnEvent {
            staker,
            principal: stake.staked_amount,
            reward,
        }
        .publish(&env);

        Ok(payout)
    }

    /// Transfer the admin role to `new_admin`.
    pub fn set_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), StakingError> {
        Self::require_admin(&env, &current_admin)?;

        if access::is_zero_account(&env, &new_admin) {
            return Err(StakingError::ZeroAddress);
        }

        storage::set_admin(&env, &new_admin);

        AdminChangedEvent {
            old_admin: current_admin,
            new_admin,
        }
        .publish(&env);
        Ok(())
    }

    /// Reward the position of `account` has accrued so far. `withdraw` pays
    /// this amount once the minimum duration has passed.
    pub fn pending_reward(env: Env, account: Address) -> Result<i128, StakingError> {
        let duration = storage::duration(&env)?;
        let stake = storage::stake(&env, &account);
        if stake.staked_amount <= 0 {
            return Ok(0);
        }
        reward::accrued(
            stake.staked_amount,
            clock::elapsed_since(&env, stake.last_deposit_time),
            duration,
        )
    }

    pub fn reward_total(env: Env) -> Result<i128, StakingError> {
        storage::token(&env)?;
        Ok(storage::reward_total(&env))
    }

    pub fn total_staked(env: Env) -> Result<i128, StakingError> {
        storage::token(&env)?;
        Ok(storage::total_staked(&env))
    }

    pub fn balance_of(env: Env, account: Address) -> Result<i128, StakingError> {
        Self::get_stake(env, account).map(|stake| stake.staked_amount)
    }

    pub fn last_deposit_time(env: Env, account: Address) -> Result<u64, StakingError> {
        Self::get_stake(env, account).map(|stake| stake.last_deposit_time)
    }

    /// Get stake data
    pub fn get_stake(env: Env, account: Address) -> Result<StakeAccount, StakingError> {
        storage::token(&env)?;
        Ok(storage::stake(&env, &account))
    }

    pub fn reward_allowance(env: Env, account: Address) -> Result<i128, StakingError> {
        storage::token(&env)?;
        Ok(storage::allowance(&env, &account))
    }

    pub fn get_duration(env: Env) -> Result<u64, StakingError> {
        storage::duration(&env)
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, StakingError> {
        storage::admin_capability(&env).map(|capability| capability.admin().clone())
    }

    /// Get token address
    pub fn get_token(env: Env) -> Result<Address, StakingError> {
        storage::token(&env)
    }
}

impl StakingContract {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), StakingError> {
        let capability = storage::admin_capability(env)?;
        if !capability.authorize(caller) {
            return Err(StakingError::Unauthorized);
        }
        Ok(())
    }
}
