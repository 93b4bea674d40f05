use ledger_common::ttl::{extend_instance, extend_persistent};
use soroban_sdk::{contracttype, Address, Env};

use crate::errors::CampaignError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,                // -> Address
    NextCampaignId,       // -> u64
    Campaign(u64),        // -> Campaign
    Pledge(u64, Address), // (campaign_id, contributor) -> i128
    Cancelled(u64),       // campaign_id -> u64 (cancellation time)
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub creator: Address,
    pub goal: i128,
    pub pledged: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub claimed: bool,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn init(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    env.storage().instance().set(&DataKey::NextCampaignId, &1u64);
    extend_instance(env);
}

pub fn token(env: &Env) -> Result<Address, CampaignError> {
    extend_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CampaignError::NotInitialized)
}

pub fn next_campaign_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(1)
}

/// Hands out the next id and advances the counter. Ids start at 1 and are
/// never reused, cancelled or not.
pub fn allocate_campaign_id(env: &Env) -> Result<u64, CampaignError> {
    let id = next_campaign_id(env);
    let next = id.checked_add(1).ok_or(CampaignError::Overflow)?;
    env.storage().instance().set(&DataKey::NextCampaignId, &next);
    extend_instance(env);
    Ok(id)
}

/// Loads a live campaign. Ids outside `[1, next_id)` and cancelled ids are
/// both reported as missing.
pub fn load_campaign(env: &Env, id: u64) -> Result<Campaign, CampaignError> {
    if id == 0 || id >= next_campaign_id(env) {
        return Err(CampaignError::CampaignNotFound);
    }
    let key = DataKey::Campaign(id);
    let campaign: Campaign = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(CampaignError::CampaignNotFound)?;
    extend_persistent(env, &key);
    Ok(campaign)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Drops the campaign record and leaves a tombstone holding the time of
/// cancellation.
pub fn tombstone_campaign(env: &Env, id: u64, cancelled_at: u64) {
    env.storage().persistent().remove(&DataKey::Campaign(id));
    let key = DataKey::Cancelled(id);
    env.storage().persistent().set(&key, &cancelled_at);
    extend_persistent(env, &key);
}

pub fn is_cancelled(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Cancelled(id))
}

pub fn pledge_of(env: &Env, id: u64, contributor: &Address) -> i128 {
    let key = DataKey::Pledge(id, contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            extend_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Writes a pledge; a zero pledge removes the entry.
pub fn set_pledge(env: &Env, id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Pledge(id, contributor.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}
