//! # Campaign Sale
//!
//! Crowdfunding escrow over a single token. A creator launches a campaign
//! with a goal and a funding window `[start_time, end_time)`; contributors
//! pledge and may take pledges back while the window is open. Once the
//! window closes the creator claims everything pledged, and while the goal
//! is unmet contributors can pull their pledges back out instead.
//!
//! ```text
//! Pending ──► Cancelled
//!    └──► Active ──► Claimed
//!            └─────► Refunded (per contributor, goal unmet)
//! ```

#![no_std]

mod errors;
mod events;
mod storage;

pub use errors::CampaignError;
pub use storage::Campaign;

use events::{
    CampaignCanceledEvent, CampaignClaimedEvent, CampaignLaunchedEvent,
    ContributedEvent, ContributionRefundedEvent, PledgeWithdrawnEvent,
};
use ledger_common::{clock, custody};
use soroban_sdk::{contract, contractimpl, log, Address, Env};

/// Longest allowed funding window.
pub const MAX_CAMPAIGN_DURATION: u64 = 90 * clock::DAY;

#[contract]
pub struct CampaignSaleContract;

#[contractimpl]
impl CampaignSaleContract {
    /// Bind the contract to the token it escrows.
    pub fn initialize(env: Env, token: Address) -> Result<(), CampaignError> {
        // Check if already initialized
        if storage::is_initialized(&env) {
            return Err(CampaignError::AlreadyInitialized);
        }

        storage::init(&env, &token);
        Ok(())
    }

    /// Launch a new campaign and return its id.
    pub fn launch_campaign(
        env: Env,
        creator: Address,
        goal: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<u64, CampaignError> {
        // Check if contract is initialized
        storage::token(&env)?;

        // Require creator authorization
        creator.require_auth();

        // Validate funding window and goal
        if start_time < clock::now(&env) {
            return Err(CampaignError::CampaignInPast);
        }
        if end_time <= start_time {
            return Err(CampaignError::NegativeDuration);
        }
        if end_time - start_time > MAX_CAMPAIGN_DURATION {
            return Err(CampaignError::DurationTooLong);
        }
        if goal <= 0 {
            return Err(CampaignError::ZeroGoal);
        }

        let id = storage::allocate_campaign_id(&env)?;
        let campaign = Campaign {
            id,
            creator: creator.clone(),
            goal,
            pledged: 0,
            start_time,
            end_time,
            claimed: false,
        };
        storage::save_campaign(&env, &campaign);

        log!(&env, "campaign launched", id, goal);
        CampaignLaunchedEvent {
            creator,
            campaign_id: id,
            goal,
            start_time,
            end_time,
        }
        .publish(&env);

        Ok(id)
    }

    /// Cancel a campaign that has not started yet.
    pub fn cancel_campaign(env: Env, caller: Address, id: u64) -> Result<(), CampaignError> {
        // Check if contract is initialized
        storage::token(&env)?;

        // Require caller authorization
        caller.require_auth();

        let campaign = storage::load_campaign(&env, id)?;
        if campaign.creator != caller {
            return Err(CampaignError::OnlyCreatorCanCancel);
        }
        let now = clock::now(&env);
        if now >= campaign.start_time {
            return Err(CampaignError::AlreadyStarted);
        }

        storage::tombstone_campaign(&env, id, now);

        CampaignCanceledEvent {
            campaign_id: id,
            creator: caller,
        }
        .publish(&env);

        Ok(())
    }

    /// Pledge `amount` to an open campaign.
    pub fn contribute(
        env: Env,
        contributor: Address,
        id: u64,
        amount: i128,
    ) -> Result<(), CampaignError> {
        // Check if contract is initialized
        let token = storage::token(&env)?;

        // Require contributor authorization
        contributor.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        Self::require_open(&env, &campaign)?;
        if amount <= 0 {
            return Err(CampaignError::ZeroAmount);
        }

        let pledge = storage::pledge_of(&env, id, &contributor);
        let new_pledge = pledge.checked_add(amount).ok_or(CampaignError::Overflow)?;
        campaign.pledged = campaign
            .pledged
            .checked_add(amount)
            .ok_or(CampaignError::Overflow)?;

        // Transfer tokens from contributor to contract
        custody::transfer_in(&env, &token, &contributor, amount);

        storage::set_pledge(&env, id, &contributor, new_pledge);
        storage::save_campaign(&env, &campaign);

        ContributedEvent {
            contributor,
            campaign_id: id,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Take back part or all of one's own pledge while the campaign is open.
    pub fn withdraw(
        env: Env,
        contributor: Address,
        id: u64,
        amount: i128,
    ) -> Result<(), CampaignError> {
        let token = storage::token(&env)?;
        contributor.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        Self::require_open(&env, &campaign)?;

        // Check pledge covers the amount
        let pledge = storage::pledge_of(&env, id, &contributor);
        if amount < 0 || amount > pledge {
            return Err(CampaignError::CannotWithdrawAmount);
        }

        campaign.pledged -= amount;
        storage::set_pledge(&env, id, &contributor, pledge - amount);
        storage::save_campaign(&env, &campaign);

        custody::transfer_out(&env, &token, &contributor, amount);

        PledgeWithdrawnEvent {
            contributor,
            campaign_id: id,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Pay everything pledged to the creator once the campaign has ended.
    ///
    /// The goal is not consulted: an underfunded campaign can still be
    /// claimed, provided nobody has refunded it down first.
    pub fn claim_campaign(env: Env, caller: Address, id: u64) -> Result<i128, CampaignError> {
        let token = storage::token(&env)?;
        caller.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        if campaign.creator != caller {
            return Err(CampaignError::NotCreator);
        }
        if clock::now(&env) < campaign.end_time {
            return Err(CampaignError::NotFinished);
        }
        if campaign.claimed {
            return Err(CampaignError::AlreadyClaimed);
        }

        // Mark claimed before paying out
        let amount = campaign.pledged;
        campaign.pledged = 0;
        campaign.claimed = true;
        storage::save_campaign(&env, &campaign);

        // Transfer pledged tokens to creator
        custody::transfer_out(&env, &token, &caller, amount);

        log!(&env, "campaign claimed", id, amount);
        CampaignClaimedEvent {
            creator: caller,
            campaign_id: id,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    /// Return a contributor's whole pledge while the campaign is short of its
    /// goal and unclaimed. The goal is compared against the current total.
    pub fn refund_campaign(
        env: Env,
        contributor: Address,
        id: u64,
    ) -> Result<i128, CampaignError> {
        let token = storage::token(&env)?;
        contributor.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        if campaign.pledged >= campaign.goal {
            return Err(CampaignError::GoalReached);
        }
        if campaign.claimed {
            return Err(CampaignError::AlreadyClaimed);
        }
        let pledge = storage::pledge_of(&env, id, &contributor);
        if pledge <= 0 {
            return Err(CampaignError::NothingToRefund);
        }

        campaign.pledged -= pledge;
        storage::set_pledge(&env, id, &contributor, 0);
        storage::save_campaign(&env, &campaign);

        custody::transfer_out(&env, &token, &contributor, pledge);

        ContributionRefundedEvent {
            contributor,
            campaign_id: id,
            amount: pledge,
        }
        .publish(&env);

        Ok(pledge)
    }

    /// Get campaign data
    pub fn get_campaign(env: Env, id: u64) -> Result<Campaign, CampaignError> {
        storage::token(&env)?;
        storage::load_campaign(&env, id)
    }

    /// Amount currently pledged by `contributor` to campaign `id`.
    pub fn pledge_of(env: Env, id: u64, contributor: Address) -> Result<i128, CampaignError> {
        storage::token(&env)?;
        storage::load_campaign(&env, id)?;
        Ok(storage::pledge_of(&env, id, &contributor))
    }

    /// Number of ids issued so far, cancelled ones included.
    pub fn campaign_count(env: Env) -> Result<u64, CampaignError> {
        storage::token(&env)?;
        Ok(storage::next_campaign_id(&env) - 1)
    }

    pub fn is_cancelled(env: Env, id: u64) -> Result<bool, CampaignError> {
        storage::token(&env)?;
        Ok(storage::is_cancelled(&env, id))
    }

    /// Get token address
    pub fn get_token(env: Env) -> Result<Address, CampaignError> {
        storage::token(&env)
    }
}

impl CampaignSaleContract {
    /// Contributions and withdrawals are accepted on `[start_time, end_time)`.
    fn require_open(env: &Env, campaign: &Campaign) -> Result<(), CampaignError> {
        let now = clock::now(env);
        if now < campaign.start_time {
            return Err(CampaignError::NotStarted);
        }
        if now >= campaign.end_time {
            return Err(CampaignError::AlreadyFinished);
        }
        Ok(())
    }
}
