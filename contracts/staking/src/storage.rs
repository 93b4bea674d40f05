use ledger_common::ttl::{extend_instance, extend_persistent};
use ledger_common::AdminCapability;
use soroban_sdk::{contracttype, Address, Env};

use crate::errors::StakingError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,              // -> Address
    Token,              // -> Address
    Duration,           // -> u64
    RewardTotal,        // -> i128
    TotalStaked,        // -> i128
    Allowance(Address), // account -> i128
    Stake(Address),     // account -> StakeAccount
}

/// A staker's position. `last_deposit_time == 0` means the account has
/// never staked or has withdrawn.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeAccount {
    pub staked_amount: i128,
    pub last_deposit_time: u64,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn init(env: &Env, admin: &Address, token: &Address, duration: u64) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Admin, admin);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::Duration, &duration);
    instance.set(&DataKey::RewardTotal, &0i128);
    instance.set(&DataKey::TotalStaked, &0i128);
    extend_instance(env);
}

pub fn admin_capability(env: &Env) -> Result<AdminCapability, StakingError> {
    extend_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .map(AdminCapability::new)
        .ok_or(StakingError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn token(env: &Env) -> Result<Address, StakingError> {
    extend_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(StakingError::NotInitialized)
}

pub fn duration(env: &Env) -> Result<u64, StakingError> {
    env.storage()
        .instance()
        .get(&DataKey::Duration)
        .ok_or(StakingError::NotInitialized)
}

pub fn set_duration(env: &Env, duration: u64) {
    env.storage().instance().set(&DataKey::Duration, &duration);
}

pub fn reward_total(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RewardTotal)
        .unwrap_or(0)
}

pub fn set_reward_total(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::RewardTotal, &amount);
}

pub fn total_staked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0)
}

pub fn set_total_staked(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalStaked, &amount);
}

pub fn allowance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Allowance(account.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            extend_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_allowance(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Allowance(account.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn stake(env: &Env, account: &Address) -> StakeAccount {
    let key = DataKey::Stake(account.clone());
    match env.storage().persistent().get(&key) {
        Some(stake) => {
            extend_persistent(env, &key);
            stake
        }
        None => StakeAccount::default(),
    }
}

/// Writes a position; an emptied position removes the entry.
pub fn save_stake(env: &Env, account: &Address, stake: &StakeAccount) {
    let key = DataKey::Stake(account.clone());
    if *stake == StakeAccount::default() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, stake);
    extend_persistent(env, &key);
}
